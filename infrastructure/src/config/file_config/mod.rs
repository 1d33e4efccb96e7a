//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod deck;
mod output;
mod play;
mod repl;

pub use deck::FileDeckConfig;
pub use output::FileOutputConfig;
pub use play::FilePlayConfig;
pub use repl::{DEFAULT_PROMPT, FileReplConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
///
/// None of these stop the program; the offending value is skipped or
/// replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("deck.quizzes[{index}]: question cannot be empty")]
    EmptyQuestion { index: usize },

    #[error("deck.quizzes[{index}]: answer cannot be empty")]
    EmptyAnswer { index: usize },

    #[error("repl.prompt cannot be empty, using default")]
    EmptyPrompt,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Play session settings
    pub play: FilePlayConfig,
    /// Initial deck
    pub deck: FileDeckConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        for (index, quiz) in self.deck.quizzes.iter().enumerate() {
            if quiz.question.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyQuestion { index });
            }
            if quiz.answer.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyAnswer { index });
            }
        }

        if self.repl.prompt.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyPrompt);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::QuizItem;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
color = false

[repl]
prompt = "trivia> "
history_file = "~/.local/share/trivia-quiz/history.txt"

[play]
seed = 7

[deck]
builtin = false

[[deck.quizzes]]
question = "Capital of Peru"
answer = "Lima"

[[deck.quizzes]]
question = "Capital of Chile"
answer = "Santiago"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.repl.prompt, "trivia> ");
        assert!(config.repl.history_file.is_some());
        assert_eq!(config.play.seed, Some(7));
        assert!(!config.deck.builtin);
        assert_eq!(
            config.deck.quizzes,
            [
                QuizItem::new("Capital of Peru", "Lima"),
                QuizItem::new("Capital of Chile", "Santiago")
            ]
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[play]
seed = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.play.seed, Some(1));
        // Defaults should apply
        assert!(config.output.color);
        assert_eq!(config.repl.prompt, DEFAULT_PROMPT);
        assert!(config.deck.builtin);
        assert!(config.deck.quizzes.is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_empty_fields() {
        let mut config = FileConfig::default();
        config.deck.quizzes = vec![
            QuizItem::new("Capital of Peru", "Lima"),
            QuizItem::new("  ", "x"),
            QuizItem::new("Capital of Chile", ""),
        ];
        config.repl.prompt = String::new();

        assert_eq!(
            config.validate(),
            [
                ConfigValidationError::EmptyQuestion { index: 1 },
                ConfigValidationError::EmptyAnswer { index: 2 },
                ConfigValidationError::EmptyPrompt,
            ]
        );
    }
}
