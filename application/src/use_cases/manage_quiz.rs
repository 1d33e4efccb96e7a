//! Manage Quiz use case
//!
//! Interactive add and edit: two sequential prompts (question, then answer)
//! followed by a single store mutation.

use crate::ports::interaction::{InteractionError, InteractionPort, SessionEvent};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use trivia_domain::{DomainError, QuizId, QuizItem, QuizStore};

const QUESTION_PROMPT: &str = "Enter a question: ";
const ANSWER_PROMPT: &str = "Enter the answer: ";

/// Errors that can occur while adding or editing a quiz
#[derive(Error, Debug)]
pub enum ManageQuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Interaction failed: {0}")]
    Interaction(#[from] InteractionError),

    #[error("The {0} cannot be empty")]
    EmptyField(&'static str),
}

impl ManageQuizError {
    /// The user backed out of a prompt; nothing was reported or stored.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ManageQuizError::Interaction(e) if e.is_cancelled())
    }
}

/// Use case for adding and editing quizzes
pub struct ManageQuizUseCase<P: InteractionPort + ?Sized> {
    port: Arc<P>,
}

impl<P: InteractionPort + ?Sized> ManageQuizUseCase<P> {
    pub fn new(port: Arc<P>) -> Self {
        Self { port }
    }

    /// Ask for a question and an answer, then append them.
    ///
    /// Nothing is stored if either prompt is cancelled or left empty.
    pub async fn add(&self, store: &mut QuizStore) -> Result<QuizId, ManageQuizError> {
        let question = non_empty(self.port.ask(QUESTION_PROMPT).await?, "question")?;
        let answer = non_empty(self.port.ask(ANSWER_PROMPT).await?, "answer")?;

        let id = store.add(question.clone(), answer.clone());
        info!("Added quiz {}", id);
        self.port.tell(&SessionEvent::QuizAdded {
            id,
            item: QuizItem::new(question, answer),
        });
        Ok(id)
    }

    /// Edit the quiz at `id`, pre-filling both prompts with the current text.
    ///
    /// An unknown `id` fails before anything is asked.
    pub async fn edit(&self, store: &mut QuizStore, id: QuizId) -> Result<(), ManageQuizError> {
        let current = store.get_by_index(id)?.clone();

        let question = non_empty(
            self.port
                .ask_prefilled(QUESTION_PROMPT, &current.question)
                .await?,
            "question",
        )?;
        let answer = non_empty(
            self.port.ask_prefilled(ANSWER_PROMPT, &current.answer).await?,
            "answer",
        )?;

        store.update(id, question.clone(), answer.clone())?;
        info!("Updated quiz {}", id);
        self.port.tell(&SessionEvent::QuizUpdated {
            id,
            item: QuizItem::new(question, answer),
        });
        Ok(())
    }
}

fn non_empty(text: String, field: &'static str) -> Result<String, ManageQuizError> {
    if text.trim().is_empty() {
        Err(ManageQuizError::EmptyField(field))
    } else {
        Ok(text)
    }
}
