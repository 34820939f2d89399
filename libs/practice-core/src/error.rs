//! Error types for practice-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing an accent-marked wordlist.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("multiple stress marks at line {line}: {word}")]
    MultipleStressMarks { line: usize, word: String },

    #[error("stress mark on a non-vowel at line {line}: {word}")]
    StressOnNonVowel { line: usize, word: String },

    #[error("duplicate word {word:?} at line {line}")]
    DuplicateWord { word: String, line: usize },
}
