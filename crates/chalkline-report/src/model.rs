//! Report schema types with JSON persistence.
//!
//! `RawReport` mirrors what the course test runner emits; `FormattedReport`
//! mirrors what the grading platform expects. Suite and case enumeration
//! must follow the source document's key order, so `serde_json` is built
//! with `preserve_order` and `results` is kept as an ordered JSON map.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// The document produced by the course test runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReport {
    /// Free-form runner output shown to the student.
    pub output: String,
    /// The test run itself.
    pub test: RawTestRun,
}

/// Pass counts and per-suite results from a single test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestRun {
    /// Total passed count, trusted verbatim as the report's overall score.
    pub passed: Number,
    /// Suite name -> (case name -> result symbol, `"+"` for a pass).
    /// Insertion order is the runner's emission order and is preserved.
    pub results: Map<String, Value>,
}

/// The document the grading platform ingests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedReport {
    /// Free-form output, carried over from the raw report.
    pub output: String,
    /// Overall score, copied from `RawTestRun::passed` without recomputation.
    pub score: Number,
    /// One block per suite, in source-document order.
    pub tests: Vec<TestBlock>,
}

/// One suite's results in the grading platform's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestBlock {
    /// Suite name, copied verbatim.
    pub name: String,
    /// Number of cases whose result symbol was `"+"`.
    pub score: u32,
    /// Total number of cases in the suite.
    pub max_score: u32,
    /// Per-case lines, `"<1-based index>. <case> : <symbol>"`, each
    /// newline-terminated.
    pub output: String,
    /// When the student may see this block. Only emitted by the
    /// visible-tests variant of the formatter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// Grading-platform visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Result is shown to the student immediately.
    Visible,
    /// Result is withheld until grades are published.
    AfterPublished,
}

impl RawReport {
    /// Load a raw runner report from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RawReport =
            serde_json::from_str(&content).context("failed to parse raw report JSON")?;
        Ok(report)
    }
}

impl FormattedReport {
    /// Write the report as compact JSON, overwriting `path` entirely.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a formatted report from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: FormattedReport =
            serde_json::from_str(&content).context("failed to parse formatted report JSON")?;
        Ok(report)
    }

    /// Pretty-printed form for console inspection.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }
}
