//! Suite 5 - integer exponentiation by repeated multiplication
//!
//! Silent fixture. The loop multiplies exactly `exp` times so a tracer sees
//! one multiplication per iteration.

use std::hint::black_box;
use std::io::{self, Write};

/// `base` raised to `exp` by repeated multiplication. `exp == 0` yields 1.
pub fn exponentiate(base: i32, exp: i32) -> i32 {
    let mut result = 1;
    for _ in 0..exp {
        result *= base;
    }
    result
}

pub fn run(_out: &mut dyn Write) -> io::Result<()> {
    let a = 12;
    let b = 4;

    let res = exponentiate(a, b); // 20736
    black_box(res);
    Ok(())
}
