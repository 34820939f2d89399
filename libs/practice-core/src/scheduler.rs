//! Streak-ladder review scheduler.
//!
//! A word climbs a fixed interval ladder on consecutive correct answers
//! (1, 3, 7 days) and retires for good once the streak reaches the
//! retirement threshold. Any miss resets the streak and schedules the word
//! for the next day.
//!
//! Every operation takes the current instant as an explicit parameter, so
//! the scheduler never reads the wall clock.

use crate::types::{AttemptRecord, WordLearningState};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;

/// Review scheduler with configurable ladder parameters.
#[derive(Debug, Clone)]
pub struct ReviewScheduler {
    /// Streak at which a word is retired from the review pool.
    pub retirement_streak: u32,
    /// Days until review after the first correct answer, and after a miss.
    pub first_interval_days: i64,
    /// Days until review after the second consecutive correct answer.
    pub second_interval_days: i64,
    /// Days until review after the third consecutive correct answer.
    pub third_interval_days: i64,
    /// Days until review at streaks past the ladder.
    pub mature_interval_days: i64,
}

impl Default for ReviewScheduler {
    fn default() -> Self {
        Self {
            retirement_streak: 4,
            first_interval_days: 1,
            second_interval_days: 3,
            third_interval_days: 7,
            mature_interval_days: 14,
        }
    }
}

impl ReviewScheduler {
    /// Initial state for a word that has never been attempted.
    ///
    /// Due at or after `initialized_at`.
    pub fn initial_state(&self, initialized_at: DateTime<Utc>) -> WordLearningState {
        WordLearningState::new(initialized_at)
    }

    /// Start a fresh learning cycle for a word, e.g. after it was removed
    /// from and re-added to a personal dictionary. Equivalent to deriving
    /// state from an empty history: streak, miss count, and retirement are
    /// all cleared, and the word is due at `occurred_at`.
    pub fn reset(&self, occurred_at: DateTime<Utc>) -> WordLearningState {
        WordLearningState::new(occurred_at)
    }

    /// Next review instant as a step function of the post-attempt streak.
    ///
    /// Total over all streak values; day offsets preserve the wall-clock
    /// time of day and follow calendar rules across month boundaries.
    pub fn next_review_instant(
        &self,
        streak_after_attempt: u32,
        reference_instant: DateTime<Utc>,
    ) -> DateTime<Utc> {
        reference_instant + Duration::days(self.interval_days(streak_after_attempt))
    }

    fn interval_days(&self, streak_after_attempt: u32) -> i64 {
        match streak_after_attempt {
            0 | 1 => self.first_interval_days,
            2 => self.second_interval_days,
            3 => self.third_interval_days,
            _ => self.mature_interval_days,
        }
    }

    /// Apply one attempt outcome and return the updated state.
    ///
    /// The input state is never mutated; the caller owns persistence of the
    /// result. Callers must not hand in retired words (they are excluded
    /// from practice upstream).
    pub fn apply_attempt(
        &self,
        state: &WordLearningState,
        correct: bool,
        occurred_at: DateTime<Utc>,
    ) -> WordLearningState {
        debug_assert!(
            !state.retired,
            "retired words are excluded from practice"
        );

        if correct {
            let streak = state.correct_streak + 1;
            if streak >= self.retirement_streak {
                // next_review_at is meaningless once retired; keep it as-is.
                WordLearningState {
                    correct_streak: streak,
                    retired: true,
                    ..state.clone()
                }
            } else {
                WordLearningState {
                    correct_streak: streak,
                    next_review_at: self.next_review_instant(streak, occurred_at),
                    ..state.clone()
                }
            }
        } else {
            // A miss never retires a word; the streak reset always wins.
            WordLearningState {
                correct_streak: 0,
                wrong_count: state.wrong_count + 1,
                next_review_at: occurred_at + Duration::days(self.first_interval_days),
                retired: state.retired,
            }
        }
    }

    /// Whether a word is due for review at `now`.
    pub fn is_due(&self, state: &WordLearningState, now: DateTime<Utc>) -> bool {
        !state.retired && state.next_review_at <= now
    }

    /// Filter the pool down to due words and return them in randomized
    /// order. The shuffle is intentional: repeated sessions over the same
    /// pool should not drill words in a predictable sequence.
    pub fn select_due<'a>(
        &self,
        pool: &'a [WordLearningState],
        now: DateTime<Utc>,
    ) -> Vec<&'a WordLearningState> {
        let mut due: Vec<&WordLearningState> =
            pool.iter().filter(|state| self.is_due(state, now)).collect();
        due.shuffle(&mut rand::rng());
        due
    }

    /// Derive a word's state by replaying its full attempt history from the
    /// initial state. Agrees with incremental [`apply_attempt`] application
    /// by construction.
    ///
    /// [`apply_attempt`]: ReviewScheduler::apply_attempt
    pub fn replay(
        &self,
        history: &[AttemptRecord],
        initialized_at: DateTime<Utc>,
    ) -> WordLearningState {
        debug_assert!(
            history
                .windows(2)
                .all(|pair| pair[0].occurred_at <= pair[1].occurred_at),
            "attempt history must be ordered by occurred_at ascending"
        );

        history
            .iter()
            .fold(self.initial_state(initialized_at), |state, record| {
                self.apply_attempt(&state, record.correct, record.occurred_at)
            })
    }
}
