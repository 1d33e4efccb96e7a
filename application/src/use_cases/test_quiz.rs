//! Test Quiz use case
//!
//! Asks a single quiz by identifier and reports whether the answer is right.

use crate::ports::interaction::{InteractionError, InteractionPort, SessionEvent};
use crate::use_cases::shared::question_prompt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use trivia_domain::{DomainError, QuizId, QuizStore, TestRound, Verdict};

/// Errors that can occur while testing a single quiz
#[derive(Error, Debug)]
pub enum TestQuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Interaction failed: {0}")]
    Interaction(#[from] InteractionError),
}

impl TestQuizError {
    /// The user backed out of a prompt; nothing was reported or stored.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TestQuizError::Interaction(e) if e.is_cancelled())
    }
}

/// Use case for testing one quiz
pub struct TestQuizUseCase<P: InteractionPort + ?Sized> {
    port: Arc<P>,
}

impl<P: InteractionPort + ?Sized> TestQuizUseCase<P> {
    pub fn new(port: Arc<P>) -> Self {
        Self { port }
    }

    /// Run the round: lookup, one `ask`, one verdict.
    ///
    /// An unknown `id` fails before anything is asked.
    pub async fn execute(&self, store: &QuizStore, id: QuizId) -> Result<Verdict, TestQuizError> {
        let round = TestRound::start(store, id)?;
        debug!("Testing quiz {}", round.id());

        let answer = self.port.ask(&question_prompt(round.question())).await?;

        let verdict = round.grade(&answer);
        info!("Quiz {} answered {}", id, verdict);
        self.port.tell(&SessionEvent::Verdict(verdict));
        Ok(verdict)
    }
}
