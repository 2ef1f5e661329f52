//! Fixture catalog model
//!
//! `suites.toml` at the repository root describes every fixture: its name,
//! theme, and expected stdout line count. Consuming tools read it to learn
//! what fixtures exist; the crate's own tests cross-check it against the
//! registry and the observed output. It is descriptive metadata only - no
//! fixture consults it at run time.

use serde::Deserialize;

/// The parsed `suites.toml` catalog
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    #[serde(rename = "suite")]
    pub suites: Vec<SuiteEntry>,
}

/// One `[[suite]]` entry in the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteEntry {
    pub name: String,
    pub theme: String,
    /// Total lines the fixture writes to stdout (0 for silent fixtures)
    pub stdout_lines: u64,
}

impl Manifest {
    /// Parse a catalog from TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The catalog shipped with this crate.
    pub fn bundled() -> Result<Self, toml::de::Error> {
        Self::parse(include_str!("../suites.toml"))
    }

    /// Look up an entry by suite name.
    pub fn get(&self, name: &str) -> Option<&SuiteEntry> {
        self.suites.iter().find(|entry| entry.name == name)
    }
}
