//! Property tests for the individual fixture functions
//!
//! Exercises each fixture's arithmetic in isolation, plus the catalog that
//! describes the suite set.

mod catalog;
