//! One bounded sequence of question rounds over a pre-shuffled selection.
//!
//! # State machine
//! `Pending` → `InProgress` (first answer) → `Completed` (last answer).
//! Answering after completion is an error; constructing a session over an
//! empty selection is rejected up front.
//!
//! Every miss immediately increments the entry's error count in the
//! store. That mutation is durable: abandoning the session does not roll
//! back rounds already played.

use crate::error::{Result, VocabError};
use crate::store::WordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Pending,
    InProgress,
    Completed,
}

/// Feedback for a single answered round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub correct: bool,
    /// The English text that was expected.
    pub expected: String,
    /// Correct answers so far.
    pub score: usize,
    /// Rounds answered so far (1-based after answering).
    pub position: usize,
    pub total: usize,
}

/// Final report for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub accuracy: f64,
    /// Store indices of missed entries, in the order they were missed.
    pub missed: Vec<usize>,
}

pub struct QuizSession {
    order: Vec<usize>,
    position: usize,
    score: usize,
    missed: Vec<usize>,
    state: SessionState,
}

impl QuizSession {
    /// Start a session over `order`, a shuffled sequence of store indices.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        if order.is_empty() {
            return Err(VocabError::EmptySelection);
        }
        Ok(Self {
            order,
            position: 0,
            score: 0,
            missed: Vec::new(),
            state: SessionState::Pending,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Rounds answered so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Store index of the entry for the upcoming round, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.order.get(self.position).copied()
    }

    /// Answer the current round and move to the next one.
    ///
    /// The answer is compared to the entry's English text ignoring ASCII
    /// case and surrounding whitespace. A miss increments the entry's
    /// error count in `store` before the round advances.
    pub fn advance(&mut self, store: &mut WordStore, answer: &str) -> Result<RoundResult> {
        if self.state == SessionState::Completed {
            return Err(VocabError::SessionComplete);
        }
        self.state = SessionState::InProgress;

        let index = self.order[self.position];
        let expected = store.entry(index).english.clone();
        let correct = answer.trim().eq_ignore_ascii_case(&expected);
        if correct {
            self.score += 1;
        } else {
            store.increment_error(index);
            self.missed.push(index);
        }

        self.position += 1;
        if self.position == self.order.len() {
            self.state = SessionState::Completed;
        }

        Ok(RoundResult {
            correct,
            expected,
            score: self.score,
            position: self.position,
            total: self.order.len(),
        })
    }

    /// Report for the rounds played so far. Accuracy is measured against
    /// the full selection, so an abandoned session scores what it earned.
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            score: self.score,
            total: self.order.len(),
            accuracy: self.score as f64 / self.order.len() as f64,
            missed: self.missed.clone(),
        }
    }
}
