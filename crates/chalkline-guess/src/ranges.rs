//! The guess-range table: which substring each round targets.
//!
//! This is static domain data, shipped as a TOML asset rather than code so
//! new word lengths can be supported without touching scoring or rendering.
//! A row for word length L has exactly L inclusive `[start, end]` entries;
//! rounds 1..L-1 are played, and the final entry spans the whole word for
//! the last row of the board.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::GuessError;
use crate::words::MIN_WORD_LENGTH;

const DEFAULT_TABLE: &str = include_str!("../assets/guess_ranges.toml");

#[derive(Debug, Deserialize)]
struct TomlTable {
    #[serde(default)]
    lengths: Vec<TomlLengthRow>,
}

#[derive(Debug, Deserialize)]
struct TomlLengthRow {
    word_length: usize,
    ranges: Vec<[usize; 2]>,
}

/// The fixed table mapping `(word_length, round)` to an inclusive
/// character-position range.
#[derive(Debug, Clone)]
pub struct GuessRanges {
    rows: HashMap<usize, Vec<(usize, usize)>>,
}

impl Default for GuessRanges {
    /// The table shipped with the game.
    fn default() -> Self {
        Self::parse(DEFAULT_TABLE).unwrap_or_else(|e| panic!("embedded range table is invalid: {e}"))
    }
}

impl GuessRanges {
    /// Load the table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GuessError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate the table from TOML text.
    pub fn parse(content: &str) -> Result<Self, GuessError> {
        let parsed: TomlTable = toml::from_str(content)?;

        let mut rows = HashMap::new();
        for row in parsed.lengths {
            validate_row(&row)?;
            let ranges = row.ranges.iter().map(|r| (r[0], r[1])).collect();
            if rows.insert(row.word_length, ranges).is_some() {
                return Err(GuessError::InvalidRanges {
                    word_length: row.word_length,
                    reason: "duplicate row".into(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Whether the table has a row for `word_length`.
    pub fn supports(&self, word_length: usize) -> bool {
        self.rows.contains_key(&word_length)
    }

    /// The inclusive `[start, end]` range targeted by 1-based `round`.
    pub fn range(&self, word_length: usize, round: usize) -> Result<(usize, usize), GuessError> {
        let row = self
            .rows
            .get(&word_length)
            .ok_or(GuessError::UnsupportedWordLength(word_length))?;
        row.get(round - 1)
            .copied()
            .ok_or_else(|| GuessError::InvalidRanges {
                word_length,
                reason: format!("no range for round {round}"),
            })
    }

    /// How many characters the guess for `round` must have.
    pub fn expected_len(&self, word_length: usize, round: usize) -> Result<usize, GuessError> {
        let (start, end) = self.range(word_length, round)?;
        Ok(end - start + 1)
    }
}

fn validate_row(row: &TomlLengthRow) -> Result<(), GuessError> {
    let len = row.word_length;
    let fail = |reason: String| GuessError::InvalidRanges {
        word_length: len,
        reason,
    };

    if len < MIN_WORD_LENGTH {
        return Err(fail(format!("word length below minimum {MIN_WORD_LENGTH}")));
    }
    if row.ranges.len() != len {
        return Err(fail(format!(
            "expected {len} ranges, found {}",
            row.ranges.len()
        )));
    }
    for &[start, end] in &row.ranges {
        if start > end || end >= len {
            return Err(fail(format!("range [{start}, {end}] out of bounds")));
        }
    }
    // The final row of the board spans the whole word.
    if row.ranges[len - 1] != [0, len - 1] {
        return Err(fail("final range must cover the whole word".into()));
    }
    Ok(())
}
