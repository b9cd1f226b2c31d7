//! Fixed-width ASCII board rendering.
//!
//! Every line is a pure function of `(round, word_length)` plus the
//! guess-range table; no game state leaks in besides the recorded scores.

use crate::error::GuessError;
use crate::ranges::GuessRanges;

const STAR: char = '*';
const DASH: char = '-';
const WALL: char = '|';

/// Column header: `"       |"` then one cell per character position.
pub fn header_line(word_length: usize) -> String {
    let mut line = String::from("       |");
    for i in 1..=word_length {
        line.push_str(&format!(" {i} {WALL}"));
    }
    line
}

/// Horizontal rule, exactly `9 + 4 * word_length` characters.
pub fn separator_line(word_length: usize) -> String {
    DASH.to_string().repeat(9 + 4 * word_length)
}

/// One guess row: stars inside the round's target range, dashes outside.
pub fn guess_line(
    ranges: &GuessRanges,
    round: usize,
    word_length: usize,
) -> Result<String, GuessError> {
    let (lower, upper) = ranges.range(word_length, round)?;

    let mut line = format!("Guess {round}{WALL}");
    for i in 0..word_length {
        let mark = if lower <= i && i <= upper { STAR } else { DASH };
        line.push_str(&format!(" {mark} {WALL}"));
    }
    Ok(line)
}

/// Render the whole progress board up to and including `round`.
///
/// Rows before `round` are completed and carry their recorded score from
/// `scores`; the row for `round` itself is still being played.
pub fn render_board(
    ranges: &GuessRanges,
    round: usize,
    word_length: usize,
    scores: &[u32],
) -> Result<String, GuessError> {
    let separator = separator_line(word_length);

    let mut board = String::new();
    board.push_str(&header_line(word_length));
    board.push('\n');
    board.push_str(&separator);
    board.push('\n');

    for i in 1..=round {
        let mut row = guess_line(ranges, i, word_length)?;
        if i != round {
            row.push_str(&format!("   {} Points", scores[i - 1]));
        }
        board.push_str(&row);
        board.push('\n');
        board.push_str(&separator);
        board.push('\n');
    }

    Ok(board)
}
