//! The fixture suites and their registry
//!
//! Each suite is an independent, self-contained fixture: none uses another,
//! and each runs a fixed computation sequence against a caller-supplied
//! output sink. The registry maps suite names to descriptors for the runner
//! binary and the test harness.

use std::io::{self, Write};

use rustc_hash::FxHashMap as HashMap;

pub mod suite4;
pub mod suite5;
pub mod suite8;
pub mod suite12;
pub mod suite14;

/// Descriptor for a single fixture suite
#[derive(Clone, Copy)]
pub struct Suite {
    /// Registry name, also the name of the standalone binary
    pub name: &'static str,
    /// One-line description of what the fixture exercises
    pub theme: &'static str,
    /// Entry point; silent fixtures write nothing to the sink
    pub run: fn(&mut dyn Write) -> io::Result<()>,
}

impl Suite {
    /// Run the suite into an in-memory buffer and return its stdout bytes.
    pub fn capture(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        (self.run)(&mut buf)?;
        Ok(buf)
    }
}

/// All fixture suites, in suite-number order
pub const ALL: &[Suite] = &[
    Suite {
        name: "suite4",
        theme: "integer arithmetic, function calls, branch",
        run: suite4::run,
    },
    Suite {
        name: "suite5",
        theme: "integer exponentiation via loop",
        run: suite5::run,
    },
    Suite {
        name: "suite8",
        theme: "deep recursion (Fibonacci), result chaining",
        run: suite8::run,
    },
    Suite {
        name: "suite12",
        theme: "mixed int/float, comparisons, divisibility classification",
        run: suite12::run,
    },
    Suite {
        name: "suite14",
        theme: "64-bit arithmetic, float vs double precision, long printed loop",
        run: suite14::run,
    },
];

/// Build the name-keyed suite registry
pub fn registry() -> HashMap<&'static str, &'static Suite> {
    ALL.iter().map(|suite| (suite.name, suite)).collect()
}

/// Look up a suite by name
pub fn find(name: &str) -> Option<&'static Suite> {
    ALL.iter().find(|suite| suite.name == name)
}
