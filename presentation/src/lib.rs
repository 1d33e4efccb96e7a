//! Presentation layer for trivia-quiz
//!
//! This crate contains CLI definitions, output formatting,
//! and the interactive quiz REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use repl::command::{Command, CommandError};
pub use repl::interaction::{ConsoleInteraction, LineInput, LineReader};
pub use repl::quiz_repl::QuizRepl;
