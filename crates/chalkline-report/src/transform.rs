//! Raw-report to formatted-report transformation.
//!
//! Inputs come from a trusted, co-versioned test runner, so shape errors
//! (a suite that is not an object, a case result that is not a string) are
//! fatal and carry context rather than being recovered from.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::model::{FormattedReport, RawReport, TestBlock, Visibility};
use crate::visible::VisibleTests;

/// Result symbol the runner emits for a passing case.
const PASS_SYMBOL: &str = "+";

impl FormattedReport {
    /// Reformat a raw runner report (variant without visibility flags).
    pub fn from_raw(raw: &RawReport) -> Result<Self> {
        Self::build(raw, None)
    }

    /// Reformat a raw runner report, flagging each suite `visible` if it
    /// appears in `visible` and `after_published` otherwise.
    pub fn from_raw_with_visibility(raw: &RawReport, visible: &VisibleTests) -> Result<Self> {
        Self::build(raw, Some(visible))
    }

    fn build(raw: &RawReport, visible: Option<&VisibleTests>) -> Result<Self> {
        let tests = raw
            .test
            .results
            .iter()
            .map(|(suite, cases)| {
                let mut block = format_suite(suite, cases)?;
                block.visibility = visible.map(|list| {
                    if list.contains(suite) {
                        Visibility::Visible
                    } else {
                        Visibility::AfterPublished
                    }
                });
                Ok(block)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FormattedReport {
            output: raw.output.clone(),
            score: raw.test.passed.clone(),
            tests,
        })
    }
}

/// Build one suite's `TestBlock` from its case map.
fn format_suite(suite: &str, cases: &Value) -> Result<TestBlock> {
    let cases: &Map<String, Value> = cases
        .as_object()
        .with_context(|| format!("suite {suite:?} is not an object of case results"))?;

    let mut output = String::new();
    let mut score = 0u32;

    for (index, (case, result)) in cases.iter().enumerate() {
        let symbol = result
            .as_str()
            .with_context(|| format!("result for case {case:?} in suite {suite:?} is not a string"))?;
        output.push_str(&format!("{}. {} : {}\n", index + 1, case, symbol));
        if symbol == PASS_SYMBOL {
            score += 1;
        }
    }

    Ok(TestBlock {
        name: suite.to_owned(),
        score,
        max_score: cases.len() as u32,
        output,
        visibility: None,
    })
}

/// End-to-end formatter pipeline: read the raw report at `path`, reformat
/// it (with visibility flags when `visible_path` is given), pretty-print
/// the result to stdout for inspection, and overwrite `path` with the
/// compact serialization.
///
/// There is no atomic replace; a crash between read and write loses the
/// original file. The pipeline that invokes this is single-writer.
pub fn format_report_file(path: &Path, visible_path: Option<&Path>) -> Result<FormattedReport> {
    let raw = RawReport::load(path)?;

    let formatted = match visible_path {
        Some(list_path) => {
            let visible = VisibleTests::load(list_path)?;
            tracing::debug!(suites = visible.len(), "loaded visible-tests list");
            FormattedReport::from_raw_with_visibility(&raw, &visible)?
        }
        None => FormattedReport::from_raw(&raw)?,
    };

    println!("{}", formatted.to_pretty_string()?);

    formatted.save(path)?;
    tracing::info!(
        suites = formatted.tests.len(),
        path = %path.display(),
        "reformatted report"
    );

    Ok(formatted)
}
