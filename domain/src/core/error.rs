//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quiz {id} not found (there are {count} quizzes)")]
    NotFound { id: usize, count: usize },

    #[error("Invalid id: '{0}' is not a non-negative integer")]
    InvalidId(String),
}

impl DomainError {
    /// Check if this error represents a missing quiz
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
