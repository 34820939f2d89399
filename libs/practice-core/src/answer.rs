//! Judging of stress-placement answers.

use crate::types::{is_russian_vowel, StressWord};
use serde::{Deserialize, Serialize};

/// Outcome of a letter selection that counts as an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Whether the selected index is the word's accent position.
    pub is_correct: bool,
    /// The character index the learner selected.
    pub selected_idx: usize,
    /// The expected accent position, for feedback display. Absent when the
    /// word carries no known accent (such a word is never answered
    /// correctly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_idx: Option<usize>,
}

/// Judge a letter selection against the word's accent position.
///
/// Selections on consonants, or at indexes past the end of the word, do not
/// count as answers and yield `None`: the practice flow records no attempt
/// for them.
pub fn judge_selection(word: &StressWord, selected_idx: usize) -> Option<SelectionResult> {
    let letter = word.word.chars().nth(selected_idx)?;
    if !is_russian_vowel(letter) {
        return None;
    }

    Some(SelectionResult {
        is_correct: word.accent_idx == Some(selected_idx),
        selected_idx,
        accent_idx: word.accent_idx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tvorog() -> StressWord {
        StressWord {
            word: "творог".to_string(),
            accent_idx: Some(2),
        }
    }

    #[test]
    fn correct_vowel_selection() {
        let result = judge_selection(&tvorog(), 2).unwrap();
        assert!(result.is_correct);
        assert_eq!(result.accent_idx, Some(2));
    }

    #[test]
    fn wrong_vowel_selection() {
        // "творог" has vowels at 2 and 4.
        let result = judge_selection(&tvorog(), 4).unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.selected_idx, 4);
        assert_eq!(result.accent_idx, Some(2));
    }

    #[test]
    fn consonant_selection_is_not_an_answer() {
        assert_eq!(judge_selection(&tvorog(), 0), None);
        assert_eq!(judge_selection(&tvorog(), 3), None);
    }

    #[test]
    fn out_of_range_selection_is_not_an_answer() {
        assert_eq!(judge_selection(&tvorog(), 6), None);
        assert_eq!(judge_selection(&tvorog(), 100), None);
    }

    #[test]
    fn judges_words_straight_from_a_parsed_list() {
        let raw = crate::parser::parse("шассИ").unwrap().remove(0);
        let word = StressWord::from(raw);
        assert!(judge_selection(&word, 4).unwrap().is_correct);
        assert!(!judge_selection(&word, 1).unwrap().is_correct);
    }

    #[test]
    fn word_without_accent_is_never_correct() {
        let word = StressWord {
            word: "ёж".to_string(),
            accent_idx: None,
        };
        let result = judge_selection(&word, 0).unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.accent_idx, None);
    }
}
