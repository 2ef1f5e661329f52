//! Fixtures - deterministic input programs for tracing and analysis tools
//!
//! This crate provides a small set of standalone fixture programs. Each
//! fixture executes a fixed sequence of arithmetic, control-flow, and
//! recursion operations and, where it prints at all, emits a byte-exact
//! sequence of lines on stdout. External tools (tracers, interpreters,
//! static analyzers) validate themselves against those values.

pub mod manifest;
pub mod render;
pub mod suites;

// Re-export commonly used types
pub use manifest::Manifest;
pub use suites::Suite;
