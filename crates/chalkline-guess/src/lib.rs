//! chalkline-guess — the word-guessing game core.
//!
//! The reference implementation of the course's sample assignment: a secret
//! word is chosen from a word bank, the player guesses predetermined
//! substrings of it round by round, each guess is scored per character, and
//! progress is rendered as a fixed-width ASCII board.

pub mod board;
pub mod error;
pub mod ranges;
pub mod score;
pub mod session;
pub mod words;

pub use board::render_board;
pub use error::GuessError;
pub use ranges::GuessRanges;
pub use score::score_guess;
pub use session::Session;
pub use words::{select_word, WordBank, WordMode, MIN_WORD_LENGTH};
