//! The visible-tests list consumed by the formatter's second variant.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Suite names whose results students may see before grades are published.
///
/// Parsed from a plain text file, one suite name per line. Names are
/// matched against suite keys by exact string equality.
#[derive(Debug, Clone, Default)]
pub struct VisibleTests {
    names: HashSet<String>,
}

impl VisibleTests {
    /// Load the list from a newline-delimited text file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read visible tests from {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parse the list from text. Blank lines are skipped; a trailing `\r`
    /// is stripped so CRLF files behave.
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { names }
    }

    /// Whether `suite` should be visible before grades are published.
    pub fn contains(&self, suite: &str) -> bool {
        self.names.contains(suite)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
