//! Interaction port for question/answer exchanges with the user.
//!
//! The session use cases never touch a terminal directly. They emit
//! [`SessionEvent`]s through [`InteractionPort::tell`] and suspend on
//! [`InteractionPort::ask`] until the user supplies a line.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`InteractionPort`] - defined here in application layer
//! - **Adapter**: `ConsoleInteraction` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! use case ──tell(event)──→ adapter prints a line
//!     │
//!     └──ask(prompt).await──→ adapter reads a line
//!                                 ↓
//!          ←── trimmed text ──────┘   (or Cancelled on Ctrl-C / Ctrl-D)
//! ```
//!
//! `ask` is the only suspension point. A use case awaits each `ask` before
//! doing anything else, so there is never more than one outstanding.
//!
//! # Built-in Implementations
//!
//! - [`ScriptedInteraction`] - replays canned answers and records everything

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use trivia_domain::{QuizId, QuizItem, Verdict};

/// Something a session reports to the user
///
/// The `Display` impl gives the plain line of text; adapters are free to
/// decorate it (color, layout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Grading result of one answer
    Verdict(Verdict),
    /// Play ran out of questions
    NoMoreQuestions,
    /// Play ended; `total` is the deck size at session start
    FinalScore { score: usize, total: usize },
    /// A quiz was appended to the store
    QuizAdded { id: QuizId, item: QuizItem },
    /// A quiz was replaced in place
    QuizUpdated { id: QuizId, item: QuizItem },
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::Verdict(verdict) => write!(f, "Your answer is {}", verdict),
            SessionEvent::NoMoreQuestions => write!(f, "No more questions."),
            SessionEvent::FinalScore { score, total } => {
                write!(f, "End of quiz. Score: {} of {}", score, total)
            }
            SessionEvent::QuizAdded { id, item } => write!(f, "Added [{}]: {}", id, item),
            SessionEvent::QuizUpdated { id, item } => {
                write!(f, "Quiz {} changed to: {}", id, item)
            }
        }
    }
}

/// Error type for interaction operations.
///
/// These errors represent failures to obtain an answer, not wrong answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// User cancelled the question (e.g., via Ctrl+C or Ctrl+D).
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    Io(String),
}

impl std::fmt::Display for InteractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionError::Cancelled => write!(f, "Cancelled"),
            InteractionError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for InteractionError {}

impl InteractionError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, InteractionError::Cancelled)
    }
}

/// Port for talking to the user during a session.
///
/// # Implementations
///
/// - **Interactive (CLI)**: `ConsoleInteraction` in presentation layer
/// - **Scripted**: [`ScriptedInteraction`]
#[async_trait]
pub trait InteractionPort: Send + Sync {
    /// Emit one line. Never suspends.
    fn tell(&self, event: &SessionEvent);

    /// Ask the user for a line and resume with the trimmed text.
    async fn ask(&self, prompt: &str) -> Result<String, InteractionError>;

    /// Ask with `initial` already typed in, ready for editing.
    ///
    /// # Default
    ///
    /// Ignores `initial` and falls back to [`InteractionPort::ask`]; adapters
    /// without an editable line buffer need not override it.
    async fn ask_prefilled(&self, prompt: &str, _initial: &str) -> Result<String, InteractionError> {
        self.ask(prompt).await
    }
}

/// Replays a fixed list of answers.
///
/// Every prompt and event is recorded for later inspection. Once the
/// answers run out, `ask` behaves like a user pressing Ctrl-D and returns
/// [`InteractionError::Cancelled`].
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    prefills: Mutex<Vec<(String, String)>>,
    events: Mutex<Vec<SessionEvent>>,
}

impl ScriptedInteraction {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Prompts passed to `ask`, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Events passed to `tell`, in order
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    /// `(prompt, initial)` pairs passed to `ask_prefilled`, in order
    pub fn prefills(&self) -> Vec<(String, String)> {
        self.prefills.lock().unwrap().clone()
    }

    pub fn ask_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl InteractionPort for ScriptedInteraction {
    fn tell(&self, event: &SessionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    async fn ask(&self, prompt: &str) -> Result<String, InteractionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or(InteractionError::Cancelled)
    }

    async fn ask_prefilled(&self, prompt: &str, initial: &str) -> Result<String, InteractionError> {
        self.prefills
            .lock()
            .unwrap()
            .push((prompt.to_string(), initial.to_string()));
        self.ask(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_replays_trimmed_answers() {
        let port = ScriptedInteraction::new(["  Rome ", "Paris"]);
        assert_eq!(port.ask("Capital of Italy?").await.unwrap(), "Rome");
        assert_eq!(port.ask("Capital of France?").await.unwrap(), "Paris");
        assert_eq!(port.prompts(), ["Capital of Italy?", "Capital of France?"]);
    }

    #[tokio::test]
    async fn test_scripted_cancels_when_exhausted() {
        let port = ScriptedInteraction::new(Vec::<String>::new());
        let err = port.ask("anything?").await.unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(port.ask_count(), 1);
    }

    #[tokio::test]
    async fn test_prefilled_records_initial_text() {
        let port = ScriptedInteraction::new(["new text"]);
        let answer = port.ask_prefilled("Edit:", "old text").await.unwrap();
        assert_eq!(answer, "new text");
        assert_eq!(
            port.prefills(),
            [("Edit:".to_string(), "old text".to_string())]
        );
        assert_eq!(port.prompts(), ["Edit:"]);
    }

    #[test]
    fn test_scripted_records_events() {
        let port = ScriptedInteraction::default();
        port.tell(&SessionEvent::NoMoreQuestions);
        assert_eq!(port.events(), [SessionEvent::NoMoreQuestions]);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            SessionEvent::Verdict(Verdict::Correct).to_string(),
            "Your answer is correct"
        );
        assert_eq!(
            SessionEvent::FinalScore { score: 2, total: 4 }.to_string(),
            "End of quiz. Score: 2 of 4"
        );
        assert_eq!(
            SessionEvent::QuizAdded {
                id: QuizId::new(3),
                item: QuizItem::new("Capital of Peru", "Lima"),
            }
            .to_string(),
            "Added [3]: Capital of Peru => Lima"
        );
    }
}
