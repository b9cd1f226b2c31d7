//! Per-character guess scoring.

/// Characters scored as vowels.
const VOWELS: &str = "aeiou";

/// Points for a positional match on a vowel.
const VOWEL_MATCH: u32 = 14;
/// Points for a positional match on a consonant.
const CONSONANT_MATCH: u32 = 12;
/// Points for a character present elsewhere in the target substring.
const PRESENT: u32 = 5;

/// Score a guess against the inclusive substring `word[start..=end]`.
///
/// Characters are compared position by position up to the shorter of the
/// guess and the substring; trailing characters of the longer one are not
/// scored. The interactive loop only accepts guesses of the expected
/// length, but the rule stands on its own for any input.
pub fn score_guess(word: &str, start_index: usize, end_index: usize, guess: &str) -> u32 {
    let target: Vec<char> = word
        .chars()
        .skip(start_index)
        .take(end_index.saturating_sub(start_index) + 1)
        .collect();

    let mut score = 0;
    for (guess_char, &word_char) in guess.chars().zip(target.iter()) {
        if guess_char == word_char {
            score += if VOWELS.contains(guess_char) {
                VOWEL_MATCH
            } else {
                CONSONANT_MATCH
            };
        } else if target.contains(&guess_char) {
            score += PRESENT;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_positions_match() {
        // h consonant, o and u vowels.
        assert_eq!(score_guess("house", 0, 2, "hou"), 12 + 14 + 14);
    }

    #[test]
    fn single_vowel_match() {
        // x and y absent from "hou"; o matches in place.
        assert_eq!(score_guess("house", 0, 2, "xoy"), 14);
    }

    #[test]
    fn present_elsewhere_scores_five() {
        // u and o both occur in "hou" but out of place.
        assert_eq!(score_guess("house", 0, 2, "uoh"), 5 + 14 + 5);
    }

    #[test]
    fn no_overlap_scores_zero() {
        assert_eq!(score_guess("house", 0, 2, "xyz"), 0);
    }

    #[test]
    fn shorter_guess_only_scored_over_its_length() {
        assert_eq!(score_guess("house", 0, 2, "h"), 12);
    }

    #[test]
    fn longer_guess_trailing_chars_ignored() {
        assert_eq!(score_guess("house", 0, 2, "houxx"), 12 + 14 + 14);
    }

    #[test]
    fn empty_guess_scores_zero() {
        assert_eq!(score_guess("house", 0, 2, ""), 0);
    }

    #[test]
    fn substring_in_word_interior() {
        // word[2..=4] = "use"; s matches (consonant), e matches (vowel).
        assert_eq!(score_guess("house", 2, 4, "xse"), 0 + 12 + 14);
    }

    #[test]
    fn end_index_past_word_is_clamped_like_a_slice() {
        // Target collapses to "se"; both match.
        assert_eq!(score_guess("house", 3, 9, "se"), 12 + 14);
    }
}
