//! Agreement between suites.toml, the registry, and observed output

use fixtures::{Manifest, suites};

use crate::common::*;

#[test]
fn catalog_matches_registry() {
    let manifest = Manifest::bundled().unwrap();
    assert_eq!(manifest.suites.len(), suites::ALL.len());
    for (entry, suite) in manifest.suites.iter().zip(suites::ALL) {
        assert_eq!(entry.name, suite.name);
        assert_eq!(entry.theme, suite.theme);
    }
}

#[test]
fn catalog_line_counts_match_observed_output() {
    let manifest = Manifest::bundled().unwrap();
    for suite in suites::ALL {
        let entry = manifest.get(suite.name).unwrap();
        let observed = capture(suite.name).lines().count() as u64;
        assert_eq!(entry.stdout_lines, observed, "line count for {}", suite.name);
    }
}
