//! Suite 14 - wide numeric ranges and a long printed loop
//!
//! Printing fixture. Exercises 64-bit integer arithmetic, single vs double
//! precision rendering, and then emits 500000 loop lines. The f32 sum
//! `0.1 + 0.2` prints as `0.3` (the sum rounds to binary32 `0.3`); the f64
//! sum prints its shortest round-trip `0.30000000000000004`.

use std::io::{self, Write};

use crate::render;

/// Loop line count; with the 8 header lines the fixture prints 500008 lines.
pub const LOOP_COUNT: i64 = 500_000;

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "This is Test Suite 14.")?;
    writeln!(out, "Testing longs and floats.")?;

    let long_var: i64 = 1234567890123456789;
    writeln!(out, "Long Value: {long_var}")?;
    let long_result = long_var * 2;
    writeln!(out, "Long Result (longVar * 2): {long_result}")?;

    let float_var: f32 = 0.1;
    writeln!(out, "Float Value: {}", render::single(float_var))?;
    let float_result = float_var + 0.2;
    writeln!(out, "Float Result (floatVar + 0.2): {}", render::single(float_result))?;

    let double_var: f64 = 0.1;
    writeln!(out, "Double Value: {}", render::double(double_var))?;
    let double_result = double_var + 0.2;
    writeln!(
        out,
        "Double Result (doubleVar + 0.2): {}",
        render::double(double_result)
    )?;

    for i in 0..LOOP_COUNT {
        let loop_long = long_var + i;
        writeln!(out, "Loop {i}: {loop_long}")?;
    }

    Ok(())
}
