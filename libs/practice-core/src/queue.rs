//! Practice queue assembly.

use crate::scheduler::ReviewScheduler;
use crate::types::PracticeWord;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Snapshot of a practice session's queue at a given instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeQueue {
    /// Due words in randomized presentation order. Drained by
    /// [`next_word`](PracticeQueue::next_word).
    pub due_words: Vec<PracticeWord>,
    /// Number of due words at build time.
    pub due_count: usize,
    /// Words retired from the pool.
    pub retired_count: usize,
    /// Words scheduled for a later instant.
    pub scheduled_count: usize,
}

impl PracticeQueue {
    /// Classify the pool at `now` and shuffle the due words.
    pub fn build(
        scheduler: &ReviewScheduler,
        pool: &[PracticeWord],
        now: DateTime<Utc>,
    ) -> Self {
        let mut due_words = Vec::new();
        let mut retired_count = 0;
        let mut scheduled_count = 0;

        for entry in pool {
            if entry.state.retired {
                retired_count += 1;
            } else if scheduler.is_due(&entry.state, now) {
                due_words.push(entry.clone());
            } else {
                scheduled_count += 1;
            }
        }

        due_words.shuffle(&mut rand::rng());

        Self {
            due_count: due_words.len(),
            due_words,
            retired_count,
            scheduled_count,
        }
    }

    /// Take the next word from the shuffled queue.
    pub fn next_word(&mut self) -> Option<PracticeWord> {
        self.due_words.pop()
    }

    /// Words left to practice in this snapshot.
    pub fn remaining(&self) -> usize {
        self.due_words.len()
    }

    /// The pool has words, but none are due: everything is either retired
    /// or scheduled for later. Distinct from an empty pool, which the
    /// surrounding application reports differently.
    pub fn all_learned(&self) -> bool {
        self.due_count == 0 && self.retired_count + self.scheduled_count > 0
    }

    /// Pool size at build time.
    pub fn total(&self) -> usize {
        self.due_count + self.retired_count + self.scheduled_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StressWord, WordLearningState};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap()
    }

    fn word(id: i64, state: WordLearningState) -> PracticeWord {
        PracticeWord {
            id,
            word: StressWord {
                word: "творог".to_string(),
                accent_idx: Some(2),
            },
            state,
        }
    }

    fn due_state() -> WordLearningState {
        WordLearningState::new(now() - Duration::days(1))
    }

    fn scheduled_state() -> WordLearningState {
        WordLearningState::new(now() + Duration::days(3))
    }

    fn retired_state() -> WordLearningState {
        WordLearningState {
            correct_streak: 4,
            wrong_count: 0,
            next_review_at: now() - Duration::days(10),
            retired: true,
        }
    }

    #[test]
    fn classifies_pool_into_due_retired_scheduled() {
        let pool = vec![
            word(1, due_state()),
            word(2, scheduled_state()),
            word(3, retired_state()),
            word(4, due_state()),
            word(5, scheduled_state()),
        ];
        let queue = PracticeQueue::build(&ReviewScheduler::default(), &pool, now());

        assert_eq!(queue.due_count, 2);
        assert_eq!(queue.retired_count, 1);
        assert_eq!(queue.scheduled_count, 2);
        assert_eq!(queue.total(), 5);

        let due_ids: Vec<i64> = queue.due_words.iter().map(|w| w.id).collect();
        assert!(due_ids.contains(&1));
        assert!(due_ids.contains(&4));
    }

    #[test]
    fn next_word_drains_the_queue() {
        let pool = vec![word(1, due_state()), word(2, due_state())];
        let mut queue = PracticeQueue::build(&ReviewScheduler::default(), &pool, now());

        assert!(queue.next_word().is_some());
        assert!(queue.next_word().is_some());
        assert_eq!(queue.remaining(), 0);
        assert!(queue.next_word().is_none());
    }

    #[test]
    fn all_learned_when_nothing_is_due() {
        let pool = vec![word(1, retired_state()), word(2, scheduled_state())];
        let queue = PracticeQueue::build(&ReviewScheduler::default(), &pool, now());
        assert!(queue.all_learned());
    }

    #[test]
    fn empty_pool_is_not_all_learned() {
        let queue = PracticeQueue::build(&ReviewScheduler::default(), &[], now());
        assert!(!queue.all_learned());
        assert_eq!(queue.total(), 0);
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn due_words_are_not_all_learned() {
        let pool = vec![word(1, due_state()), word(2, retired_state())];
        let queue = PracticeQueue::build(&ReviewScheduler::default(), &pool, now());
        assert!(!queue.all_learned());
    }
}
