//! The interactive game loop.
//!
//! `Session` is generic over its input and output streams so tests can
//! drive a whole game from a scripted buffer. The loop is sequential and
//! blocks on input between rounds.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::render_board;
use crate::ranges::GuessRanges;
use crate::score::score_guess;
use crate::words::{select_word, WordBank, WordMode};

const WELCOME: &str = "Welcome to Guess My Word!\n\
    Guess the secret word piece by piece, round by round.";
const INPUT_ACTION: &str = "Please enter an action (s to start, h for help, q to quit): ";
const HELP: &str = "Each round targets the starred letters of the secret word.\n\
    Scoring per letter: 14 for a vowel in place, 12 for a consonant in place,\n\
    5 for a letter found elsewhere in the target, 0 otherwise.";
const INVALID: &str = "That is not a valid action. Please try again.";
const NO_SELECTION: &str = "That is not a valid word selection. Please enter FIXED or ARBITRARY.";

/// One interactive game over the given input and output streams.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    bank: WordBank,
    ranges: GuessRanges,
    mode: Option<WordMode>,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(bank: WordBank, ranges: GuessRanges, input: R, output: W) -> Self {
        Self {
            input,
            output,
            bank,
            ranges,
            mode: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Skip the mode prompt and always draw from `mode`'s pool.
    pub fn with_mode(mut self, mode: WordMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Top-level action loop: start, help, or quit.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{WELCOME}")?;
        loop {
            let Some(action) = self.prompt(INPUT_ACTION)? else {
                return Ok(());
            };
            match action.as_str() {
                "s" => {
                    self.play()?;
                    return Ok(());
                }
                "h" => {
                    writeln!(self.output, "{HELP}")?;
                    self.play()?;
                    return Ok(());
                }
                "q" => return Ok(()),
                _ => writeln!(self.output, "{INVALID}")?,
            }
        }
    }

    fn play(&mut self) -> Result<()> {
        let Some(word) = self.choose_word()? else {
            return Ok(());
        };
        let word_length = word.chars().count();
        tracing::debug!(word_length, "word selected");

        writeln!(self.output, "Now try and guess the word, step by step!!")?;

        let mut scores: Vec<u32> = Vec::new();
        let mut round = 1;

        while round < word_length {
            let board = render_board(&self.ranges, round, word_length, &scores)?;
            write!(self.output, "{board}")?;

            let (start, end) = self.ranges.range(word_length, round)?;
            let expected = end - start + 1;

            // Reprompt until the guess has the round's expected length.
            let guess = loop {
                let Some(guess) = self.prompt(&format!("Now enter Guess {round}: "))? else {
                    anyhow::bail!("input ended before the game finished");
                };
                if guess.chars().count() == expected {
                    break guess;
                }
            };

            scores.push(score_guess(&word, start, end, &guess));
            round += 1;
        }

        let board = render_board(&self.ranges, round, word_length, &scores)?;
        write!(self.output, "{board}")?;

        let Some(final_guess) =
            self.prompt("Now enter your final guess. i.e. guess the whole word: ")?
        else {
            anyhow::bail!("input ended before the game finished");
        };

        if final_guess == word {
            writeln!(
                self.output,
                "You have guessed the word correctly. Congratulations."
            )?;
        } else {
            writeln!(
                self.output,
                "Your guess was wrong. The correct word was \"{word}\""
            )?;
        }
        Ok(())
    }

    /// Resolve the target word, reprompting while the typed mode selects
    /// nothing. Returns `None` only if input ends at the mode prompt.
    fn choose_word(&mut self) -> Result<Option<String>> {
        loop {
            let mode = match self.mode {
                Some(mode) => mode.to_string(),
                None => {
                    let Some(typed) =
                        self.prompt("Do you want a 'FIXED' or 'ARBITRARY' length word?: ")?
                    else {
                        return Ok(None);
                    };
                    typed
                }
            };
            match select_word(&self.bank, &mode, &mut self.rng) {
                Some(word) => return Ok(Some(word)),
                None => writeln!(self.output, "{NO_SELECTION}")?,
            }
        }
    }

    /// Write a prompt, flush, and read one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }
}
