//! Infrastructure layer for trivia-quiz
//!
//! This crate contains configuration file loading and the initial deck
//! that seeds the in-memory quiz store.

pub mod config;
pub mod deck;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_PROMPT, FileConfig, FileDeckConfig,
    FileOutputConfig, FilePlayConfig, FileReplConfig,
};
pub use deck::{builtin_deck, seed_store};
