//! Deck configuration from TOML (`[deck]` section)
//!
//! ```toml
//! [deck]
//! builtin = false
//!
//! [[deck.quizzes]]
//! question = "Capital of Peru"
//! answer = "Lima"
//! ```

use serde::{Deserialize, Serialize};
use trivia_domain::QuizItem;

/// Raw initial-deck configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeckConfig {
    /// Seed the store with the built-in deck when no quizzes are listed
    pub builtin: bool,
    /// Quizzes to seed the store with, in order
    pub quizzes: Vec<QuizItem>,
}

impl Default for FileDeckConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            quizzes: Vec::new(),
        }
    }
}
