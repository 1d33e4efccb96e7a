//! Application layer for trivia-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::interaction::{
    InteractionError, InteractionPort, ScriptedInteraction, SessionEvent,
};
pub use use_cases::manage_quiz::{ManageQuizError, ManageQuizUseCase};
pub use use_cases::play_quiz::{PlayOutcome, PlayQuizError, PlayQuizUseCase};
pub use use_cases::test_quiz::{TestQuizError, TestQuizUseCase};
