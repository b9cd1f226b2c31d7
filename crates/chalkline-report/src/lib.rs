//! chalkline-report — report reformatting for the grading pipeline.
//!
//! Takes the JSON output of the course test runner and converts it into the
//! JSON schema the autograding platform ingests: one block per test suite
//! with a score, a max score, per-case output lines, and (optionally) a
//! visibility flag controlling when students see the result.

pub mod model;
pub mod transform;
pub mod visible;

pub use model::{FormattedReport, RawReport, TestBlock, Visibility};
pub use transform::format_report_file;
pub use visible::VisibleTests;
