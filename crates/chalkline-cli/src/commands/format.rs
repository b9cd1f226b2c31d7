//! The `chalkline format` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(report: PathBuf, visible_tests: Option<PathBuf>) -> Result<()> {
    chalkline_report::format_report_file(&report, visible_tests.as_deref())?;
    Ok(())
}
