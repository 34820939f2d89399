//! Core types for stress-practice scheduling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Russian vowels, the only letters a stress mark may sit on.
pub const RUSSIAN_VOWELS: [char; 10] = ['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

/// Whether a letter is a Russian vowel (case-insensitive).
pub fn is_russian_vowel(letter: char) -> bool {
    letter
        .to_lowercase()
        .all(|lower| RUSSIAN_VOWELS.contains(&lower))
}

/// Per-word learning state, derived from the word's attempt history.
///
/// The persistence layer stores this verbatim and hands it back on the next
/// attempt; it carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLearningState {
    /// Consecutive correct attempts since the last miss or reset.
    pub correct_streak: u32,
    /// Lifetime miss count. Diagnostic only; never affects scheduling.
    pub wrong_count: u32,
    /// Earliest instant the word is due for review again.
    pub next_review_at: DateTime<Utc>,
    /// Set once the streak reaches the retirement threshold. A retired word
    /// never re-enters the review pool within its learning cycle.
    pub retired: bool,
}

impl WordLearningState {
    /// State for a never-attempted word. Due at or after `initialized_at`.
    pub fn new(initialized_at: DateTime<Utc>) -> Self {
        Self {
            correct_streak: 0,
            wrong_count: 0,
            next_review_at: initialized_at,
            retired: false,
        }
    }
}

/// One persisted practice attempt, as the storage layer returns it.
///
/// Histories are append-only and ordered by `occurred_at` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub correct: bool,
    pub occurred_at: DateTime<Utc>,
}

/// A word as parsed from an accent-marked wordlist, before the surrounding
/// application assigns it an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWord {
    /// Fully lowercased form, stress mark stripped.
    pub word: String,
    /// Character index (not byte index) of the stressed vowel, if marked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_idx: Option<usize>,
    pub line_number: usize,
}

/// A stress-practice word: the lowercased form plus the accent position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressWord {
    pub word: String,
    /// Character index of the stressed vowel. Absent when the source list
    /// carried no mark for this word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_idx: Option<usize>,
}

impl From<RawWord> for StressWord {
    fn from(raw: RawWord) -> Self {
        Self {
            word: raw.word,
            accent_idx: raw.accent_idx,
        }
    }
}

/// A word in a user's practice pool: content plus scheduling state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeWord {
    pub id: i64,
    pub word: StressWord,
    pub state: WordLearningState,
}
