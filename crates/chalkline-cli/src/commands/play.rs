//! The `chalkline play` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use chalkline_guess::{GuessRanges, Session, WordBank, WordMode};

pub fn execute(
    mode: Option<String>,
    fixed_words: Option<PathBuf>,
    arbitrary_words: Option<PathBuf>,
    ranges: Option<PathBuf>,
) -> Result<()> {
    let mode = mode
        .map(|m| {
            m.parse::<WordMode>()
                .map_err(|e| anyhow::anyhow!("{e} (expected FIXED or ARBITRARY)"))
        })
        .transpose()?;

    let bank = match (fixed_words, arbitrary_words) {
        (Some(fixed), Some(arbitrary)) => WordBank::from_files(&fixed, &arbitrary)
            .context("failed to load word lists")?,
        _ => WordBank::default(),
    };

    let ranges = match ranges {
        Some(path) => GuessRanges::load(&path)
            .with_context(|| format!("failed to load guess ranges from {}", path.display()))?,
        None => GuessRanges::default(),
    };

    tracing::debug!(mode = ?mode, "starting interactive session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(bank, ranges, stdin.lock(), stdout.lock());
    if let Some(mode) = mode {
        session = session.with_mode(mode);
    }
    session.run()
}
