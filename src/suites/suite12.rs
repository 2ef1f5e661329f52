//! Suite 12 - mixed types, comparisons, and divisibility classification
//!
//! Printing fixture. Emits a fixed header, two comparison results, and then
//! one classification line per matching integer in `0..31`. Classification
//! is first-match: divisible-by-15 wins over 5, which wins over 3; other
//! integers produce no line.

use std::io::{self, Write};

use crate::render;

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "This is Test Suite 12.")?;

    let x = 42;
    let y = x * 2;
    writeln!(out, "X = {x}")?;
    writeln!(out, "Y = {y}")?;
    let z = f64::from(y) / 3.0;
    writeln!(out, "Z = {}", render::double(z))?;

    let a = 10;
    let b = 20;
    if a < b {
        writeln!(out, "A is less than B")?;
    } else {
        writeln!(out, "A is not less than B")?;
    }

    let p = 15;
    let q = 15;
    if p >= q {
        writeln!(out, "P is greater than or equal to Q")?;
    } else {
        writeln!(out, "P is less than Q")?;
    }

    let pi = 3.14159;
    writeln!(out, "Value of Pi: {}", render::double(pi))?;

    let max_count = 31;

    for i in 0..max_count {
        if i % 15 == 0 {
            writeln!(out, "{i} is divisible by 15")?;
        } else if i % 5 == 0 {
            writeln!(out, "{i} is divisible by 5")?;
        } else if i % 3 == 0 {
            writeln!(out, "{i} is divisible by 3")?;
        }
    }

    Ok(())
}
