//! Game configuration error types.
//!
//! These cover loading and validating the word bank and the guess-range
//! table; gameplay itself has no error paths beyond I/O.

use thiserror::Error;

/// Errors raised while loading or validating game configuration.
#[derive(Debug, Error)]
pub enum GuessError {
    /// A word in a word list is shorter than the supported minimum.
    #[error("word {word:?} is {len} characters, minimum is {min}")]
    WordTooShort { word: String, len: usize, min: usize },

    /// A word list contains no words.
    #[error("word list for mode {0} is empty")]
    EmptyWordList(&'static str),

    /// The guess-range table has no row for this word length.
    #[error("no guess ranges defined for word length {0}")]
    UnsupportedWordLength(usize),

    /// A row in the guess-range table fails validation.
    #[error("invalid guess ranges for word length {word_length}: {reason}")]
    InvalidRanges { word_length: usize, reason: String },

    /// The guess-range table asset could not be parsed.
    #[error("failed to parse guess-range table: {0}")]
    Table(#[from] toml::de::Error),

    /// A word list or table file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
