//! Core library for Russian stress-practice scheduling.
//!
//! Provides:
//! - Streak-ladder review scheduler (due test, attempt transitions, history replay)
//! - Parser for accent-marked wordlists
//! - Stress-answer judgement for letter selections
//! - Practice queue assembly (due words in randomized order)
//!
//! Everything here is pure computation over caller-supplied values: the
//! current instant is always an explicit parameter, and persistence of the
//! resulting state belongs to the calling application.

pub mod answer;
pub mod error;
pub mod parser;
pub mod queue;
pub mod scheduler;
pub mod types;

pub use answer::{judge_selection, SelectionResult};
pub use error::{ParseError, Result};
pub use parser::parse;
pub use queue::PracticeQueue;
pub use scheduler::ReviewScheduler;
pub use types::{
    is_russian_vowel, AttemptRecord, PracticeWord, RawWord, StressWord, WordLearningState,
    RUSSIAN_VOWELS,
};
