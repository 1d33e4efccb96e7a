//! Quiz domain entities

use serde::{Deserialize, Serialize};

/// A question/answer pair stored in the deck (Entity)
///
/// The stored answer keeps whatever the author typed; comparison against a
/// user's answer goes through [`normalize_answer`] on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub answer: String,
}

impl QuizItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Check a user's answer against the stored one.
    ///
    /// Both sides are lowercased and trimmed before an exact comparison.
    pub fn is_correct(&self, given: &str) -> bool {
        normalize_answer(&self.answer) == normalize_answer(given)
    }
}

impl std::fmt::Display for QuizItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.question, self.answer)
    }
}

/// Normalize an answer for comparison (surrounding whitespace, case)
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}
