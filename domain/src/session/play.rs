//! Randomized full-deck play session
//!
//! # State machine
//!
//! ```text
//!              ┌──────────── correct ─────────────┐
//!              ↓                                  │
//! start ──→ Selecting ──→ AwaitingAnswer ──→ (answer)
//!              │  │                               │
//!   remaining  │  └─ lookup fails ─→ Failed       └─ incorrect ─→ Finished(WrongAnswer)
//!    empty     ↓
//!         Finished(Exhausted)
//! ```
//!
//! Identifiers are drawn uniformly from everything still in `remaining`
//! and removed on draw, so no item repeats within one session.

use super::verdict::Verdict;
use crate::core::error::DomainError;
use crate::quiz::{entities::QuizItem, id::QuizId, store::QuizStore};
use rand::Rng;

/// Why a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Every item was answered correctly
    Exhausted,
    /// The first wrong answer ended the session
    WrongAnswer,
}

/// Current state of a [`PlaySession`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    Selecting,
    AwaitingAnswer { id: QuizId, item: QuizItem },
    Finished { score: usize, reason: FinishReason },
    Failed { score: usize, error: DomainError },
}

impl PlayState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlayState::Finished { .. } | PlayState::Failed { .. })
    }
}

/// What the driver has to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayStep {
    /// Ask this question and feed the reply to [`PlaySession::answer`]
    Ask { id: QuizId, question: String },
    /// The session is over
    Finished { score: usize, reason: FinishReason },
}

/// A randomized, no-repeat, score-accumulating run over the whole deck
#[derive(Debug, Clone)]
pub struct PlaySession {
    remaining: Vec<QuizId>,
    score: usize,
    total: usize,
    state: PlayState,
}

impl PlaySession {
    /// Start a session over every identifier currently in the store.
    pub fn start(store: &QuizStore) -> Self {
        let remaining = store.ids();
        Self {
            total: remaining.len(),
            remaining,
            score: 0,
            state: PlayState::Selecting,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of items in the deck when the session started
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> &[QuizId] {
        &self.remaining
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// Advance from `Selecting`.
    ///
    /// Draws the next identifier and returns the question to ask, or the
    /// terminal result when nothing is left. Calling this while already
    /// awaiting an answer repeats the pending question; calling it after the
    /// session ended repeats the terminal result.
    pub fn next_step<R: Rng>(
        &mut self,
        store: &QuizStore,
        rng: &mut R,
    ) -> Result<PlayStep, DomainError> {
        match &self.state {
            PlayState::Selecting => {}
            PlayState::AwaitingAnswer { id, item } => {
                return Ok(PlayStep::Ask {
                    id: *id,
                    question: item.question.clone(),
                });
            }
            PlayState::Finished { score, reason } => {
                return Ok(PlayStep::Finished {
                    score: *score,
                    reason: *reason,
                });
            }
            PlayState::Failed { error, .. } => return Err(error.clone()),
        }

        if self.remaining.is_empty() {
            self.state = PlayState::Finished {
                score: self.score,
                reason: FinishReason::Exhausted,
            };
            return Ok(PlayStep::Finished {
                score: self.score,
                reason: FinishReason::Exhausted,
            });
        }

        // Uniform over the whole pool, last element included
        let pick = rng.random_range(0..self.remaining.len());
        let id = self.remaining.swap_remove(pick);

        match store.get_by_index(id) {
            Ok(item) => {
                let question = item.question.clone();
                self.state = PlayState::AwaitingAnswer {
                    id,
                    item: item.clone(),
                };
                Ok(PlayStep::Ask { id, question })
            }
            Err(error) => {
                self.state = PlayState::Failed {
                    score: self.score,
                    error: error.clone(),
                };
                Err(error)
            }
        }
    }

    /// Grade the reply to the pending question.
    ///
    /// A correct answer bumps the score and returns to `Selecting`; an
    /// incorrect one finishes the session. Returns `None` when no question
    /// is pending.
    pub fn answer(&mut self, given: &str) -> Option<Verdict> {
        let PlayState::AwaitingAnswer { item, .. } = &self.state else {
            return None;
        };

        let verdict = Verdict::from_bool(item.is_correct(given));
        self.state = match verdict {
            Verdict::Correct => {
                self.score += 1;
                PlayState::Selecting
            }
            Verdict::Incorrect => PlayState::Finished {
                score: self.score,
                reason: FinishReason::WrongAnswer,
            },
        };
        Some(verdict)
    }
}
