//! Byte-exact stdout goldens for the printing fixtures

use crate::common::*;

const SUITE12_GOLDEN: &str = "\
This is Test Suite 12.
X = 42
Y = 84
Z = 28.0
A is less than B
P is greater than or equal to Q
Value of Pi: 3.14159
0 is divisible by 15
3 is divisible by 3
5 is divisible by 5
6 is divisible by 3
9 is divisible by 3
10 is divisible by 5
12 is divisible by 3
15 is divisible by 15
18 is divisible by 3
20 is divisible by 5
21 is divisible by 3
24 is divisible by 3
25 is divisible by 5
27 is divisible by 3
30 is divisible by 15
";

#[test]
fn suite12_full_output() {
    assert_eq!(capture("suite12"), SUITE12_GOLDEN);
}

#[test]
fn suite14_header_block() {
    let output = capture("suite14");
    let header: Vec<&str> = output.lines().take(8).collect();
    assert_eq!(
        header,
        [
            "This is Test Suite 14.",
            "Testing longs and floats.",
            "Long Value: 1234567890123456789",
            "Long Result (longVar * 2): 2469135780246913578",
            "Float Value: 0.1",
            "Float Result (floatVar + 0.2): 0.3",
            "Double Value: 0.1",
            "Double Result (doubleVar + 0.2): 0.30000000000000004",
        ]
    );
}

#[test]
fn suite14_loop_lines() {
    let output = capture("suite14");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 8 + 500_000);
    assert_eq!(lines[8], "Loop 0: 1234567890123456789");
    assert_eq!(lines[8 + 250_000], "Loop 250000: 1234567890123706789");
    assert_eq!(lines[lines.len() - 1], "Loop 499999: 1234567890123956788");
}

#[test]
fn every_line_ends_with_newline() {
    for name in ["suite12", "suite14"] {
        let output = capture(name);
        assert!(output.ends_with('\n'), "{name} missing final newline");
        assert!(!output.contains("\r\n"), "{name} contains CRLF");
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    assert_eq!(capture("suite12"), capture("suite12"));
    assert_eq!(capture("suite4"), capture("suite4"));
}
