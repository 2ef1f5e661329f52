//! Scalar-to-string rendering for the printing fixtures
//!
//! Fixture output follows the convention "shortest decimal that round-trips
//! to the original IEEE-754 value", with integral-valued floats keeping a
//! trailing `.0`. Rust's float `Display` already produces the shortest
//! round-trip decimal, so only the `.0` suffix needs handling here: `28.0`
//! must render as `"28.0"`, not `"28"`.

/// Render an `f64` in the fixtures' decimal notation.
///
/// `0.1` renders as `"0.1"`, `0.1 + 0.2` as `"0.30000000000000004"`, and
/// integral values such as `28.0` as `"28.0"`. Fixture values all fall in
/// the plain-decimal range, so no exponent form is ever produced.
pub fn double(value: f64) -> String {
    with_point(value.to_string())
}

/// Render an `f32` in the fixtures' decimal notation.
///
/// Shortest round-trip at single precision: `0.1f32` renders as `"0.1"` and
/// `0.1f32 + 0.2f32` as `"0.3"` (the sum rounds to the same binary32 value
/// as the literal `0.3`).
pub fn single(value: f32) -> String {
    with_point(value.to_string())
}

fn with_point(mut s: String) -> String {
    if s.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        s.push_str(".0");
    }
    s
}
