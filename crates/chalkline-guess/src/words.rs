//! Word bank loading and random word selection.

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GuessError;

/// Shortest word the game supports.
pub const MIN_WORD_LENGTH: usize = 6;

/// Which word pool the player draws from.
///
/// `FIXED` holds words of a single fixed length; `ARBITRARY` holds words of
/// varying lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordMode {
    Fixed,
    Arbitrary,
}

impl fmt::Display for WordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordMode::Fixed => write!(f, "FIXED"),
            WordMode::Arbitrary => write!(f, "ARBITRARY"),
        }
    }
}

impl FromStr for WordMode {
    type Err = String;

    // Only the exact course-specified spellings are modes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(WordMode::Fixed),
            "ARBITRARY" => Ok(WordMode::Arbitrary),
            other => Err(format!("not a word mode: {other}")),
        }
    }
}

/// The candidate words for a game, one pool per selection mode.
#[derive(Debug, Clone)]
pub struct WordBank {
    fixed: Vec<String>,
    arbitrary: Vec<String>,
}

const DEFAULT_FIXED: &str = include_str!("../assets/words_fixed.txt");
const DEFAULT_ARBITRARY: &str = include_str!("../assets/words_arbitrary.txt");

impl Default for WordBank {
    /// The word lists shipped with the game.
    fn default() -> Self {
        Self::from_readers(DEFAULT_FIXED.as_bytes(), DEFAULT_ARBITRARY.as_bytes())
            .unwrap_or_else(|e| panic!("embedded word lists are invalid: {e}"))
    }
}

impl WordBank {
    /// Build a bank from two word-list readers, one word per line.
    ///
    /// Blank lines are skipped; every word must be at least
    /// [`MIN_WORD_LENGTH`] characters and both pools must be non-empty.
    pub fn from_readers<F: BufRead, A: BufRead>(fixed: F, arbitrary: A) -> Result<Self, GuessError> {
        Ok(Self {
            fixed: read_words(fixed, "FIXED")?,
            arbitrary: read_words(arbitrary, "ARBITRARY")?,
        })
    }

    /// Build a bank from two word-list files.
    pub fn from_files(fixed: &Path, arbitrary: &Path) -> Result<Self, GuessError> {
        let fixed = std::io::BufReader::new(std::fs::File::open(fixed)?);
        let arbitrary = std::io::BufReader::new(std::fs::File::open(arbitrary)?);
        Self::from_readers(fixed, arbitrary)
    }

    /// The candidate pool for `mode`.
    pub fn pool(&self, mode: WordMode) -> &[String] {
        match mode {
            WordMode::Fixed => &self.fixed,
            WordMode::Arbitrary => &self.arbitrary,
        }
    }
}

fn read_words<R: BufRead>(reader: R, mode: &'static str) -> Result<Vec<String>, GuessError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let len = word.chars().count();
        if len < MIN_WORD_LENGTH {
            return Err(GuessError::WordTooShort {
                word: word.to_owned(),
                len,
                min: MIN_WORD_LENGTH,
            });
        }
        words.push(word.to_owned());
    }
    if words.is_empty() {
        return Err(GuessError::EmptyWordList(mode));
    }
    Ok(words)
}

/// Select a word uniformly at random from the pool named by `raw_mode`.
///
/// Any mode string other than `"FIXED"` or `"ARBITRARY"` selects nothing;
/// callers must handle the `None` before starting a game.
pub fn select_word<R: Rng + ?Sized>(bank: &WordBank, raw_mode: &str, rng: &mut R) -> Option<String> {
    let mode = raw_mode.parse::<WordMode>().ok()?;
    bank.pool(mode).choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mode_parsing_is_exact() {
        assert_eq!("FIXED".parse::<WordMode>().unwrap(), WordMode::Fixed);
        assert_eq!("ARBITRARY".parse::<WordMode>().unwrap(), WordMode::Arbitrary);
        assert!("fixed".parse::<WordMode>().is_err());
        assert!("Fixed".parse::<WordMode>().is_err());
        assert!("".parse::<WordMode>().is_err());
    }

    #[test]
    fn default_bank_words_meet_minimum_length() {
        let bank = WordBank::default();
        for mode in [WordMode::Fixed, WordMode::Arbitrary] {
            assert!(!bank.pool(mode).is_empty());
            for word in bank.pool(mode) {
                assert!(word.chars().count() >= MIN_WORD_LENGTH, "{word}");
            }
        }
    }

    #[test]
    fn select_word_draws_from_matching_pool() {
        let bank = WordBank::default();
        let mut rng = StdRng::seed_from_u64(7);

        let word = select_word(&bank, "FIXED", &mut rng).unwrap();
        assert!(bank.pool(WordMode::Fixed).contains(&word));

        let word = select_word(&bank, "ARBITRARY", &mut rng).unwrap();
        assert!(bank.pool(WordMode::Arbitrary).contains(&word));
    }

    #[test]
    fn invalid_mode_selects_nothing() {
        let bank = WordBank::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_word(&bank, "INVALID_MODE", &mut rng), None);
        assert_eq!(select_word(&bank, "", &mut rng), None);
    }

    #[test]
    fn short_word_rejected() {
        let err = WordBank::from_readers("apple\n".as_bytes(), "holiday\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GuessError::WordTooShort { len: 5, .. }));
    }

    #[test]
    fn empty_list_rejected() {
        let err = WordBank::from_readers("\n\n".as_bytes(), "holiday\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GuessError::EmptyWordList("FIXED")));
    }

    #[test]
    fn bank_loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let fixed = dir.path().join("fixed.txt");
        let arbitrary = dir.path().join("arbitrary.txt");
        std::fs::write(&fixed, "tomato\n").unwrap();
        std::fs::write(&arbitrary, "pineapple\n").unwrap();

        let bank = WordBank::from_files(&fixed, &arbitrary).unwrap();
        assert_eq!(bank.pool(WordMode::Fixed), ["tomato"]);
        assert_eq!(bank.pool(WordMode::Arbitrary), ["pineapple"]);
    }
}
