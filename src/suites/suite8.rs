//! Suite 8 - naive recursive Fibonacci with result chaining
//!
//! Silent fixture. `fib` must stay the two-call recursion without
//! memoization: consuming tools measure the call tree, which grows as
//! `2 * fib(n + 1) - 1` calls.

use std::hint::black_box;
use std::io::{self, Write};

/// Naive recursive Fibonacci: `fib(n) = n` for `n <= 1`.
pub fn fib(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

pub fn run(_out: &mut dyn Write) -> io::Result<()> {
    let a = 5;
    let b = 5;

    let c = a + b; // 10
    let res = fib(c); // 55

    let d = res - 40; // 15
    let res2 = fib(d); // 610

    let e = res2 - 590; // 20
    let res3 = fib(e); // 6765

    black_box(res3);
    Ok(())
}
