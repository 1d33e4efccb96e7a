//! Quiz identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Positional identifier of a quiz in the store (Value Object)
///
/// The identifier IS the item's current zero-based position. It is not
/// stable: deleting an earlier item renumbers every later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(usize);

impl QuizId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the position this identifier refers to
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for QuizId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for QuizId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl FromStr for QuizId {
    type Err = DomainError;

    /// Parse a non-negative integer, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // usize::from_str accepts a leading '+'
        if trimmed.starts_with('+') {
            return Err(DomainError::InvalidId(s.to_string()));
        }
        trimmed
            .parse::<usize>()
            .map(Self)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}
