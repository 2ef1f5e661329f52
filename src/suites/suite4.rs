//! Suite 4 - integer arithmetic with a branch
//!
//! Silent fixture: two pure helper functions, a call sequence, and one
//! conditional. The observable behavior is the internal state progression
//! (an external tracer watches the values), so the final result is routed
//! through `black_box` to keep the computation live.

use std::hint::black_box;
use std::io::{self, Write};

/// `a * b`
pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

/// Integer division, truncating toward zero.
pub fn divide(a: i32, b: i32) -> i32 {
    a / b
}

pub fn run(_out: &mut dyn Write) -> io::Result<()> {
    let a = 3200;
    let b = 8;
    let res = multiply(a, b); // 25600

    let c = 2000;
    let d = 4;
    let res2 = divide(c, d); // 500

    let mut total = res + res2; // 26100

    if total > 25000 {
        total -= 2000; // 24100
    } else {
        total += 2000; // not executed
    }

    black_box(total);
    Ok(())
}
