//! Domain layer for trivia-quiz
//!
//! This crate contains the quiz store, its identifier semantics, and the
//! session state machines. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz Store
//!
//! An ordered deck of question/answer pairs. The public identifier of an
//! item is its current position in the deck:
//!
//! - **Append**: a new item gets the identifier `count()` had before insertion
//! - **Delete**: every item after the deleted one shifts down by one
//!
//! ## Sessions
//!
//! - **Test**: one question, one answer, one verdict
//! - **Play**: every item in random order without repetition, until the deck
//!   is exhausted or the first wrong answer

pub mod core;
pub mod quiz;
pub mod session;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use quiz::{
    entities::{QuizItem, normalize_answer},
    id::QuizId,
    store::QuizStore,
};
pub use session::{
    play::{FinishReason, PlaySession, PlayState, PlayStep},
    test_round::TestRound,
    verdict::Verdict,
};
