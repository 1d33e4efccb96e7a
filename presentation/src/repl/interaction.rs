//! Terminal adapter for [`InteractionPort`]
//!
//! One reedline editor serves both the REPL command prompt and the
//! questions asked during a session, so history and key bindings are
//! shared between them.

use super::prompt::LinePrompt;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use reedline::{EditCommand, FileBackedHistory, Reedline, Signal};
use std::sync::Mutex;
use tracing::{debug, warn};
use trivia_application::{InteractionError, InteractionPort, SessionEvent};

const HISTORY_CAPACITY: usize = 1000;

/// Outcome of reading one line from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// A submitted line, trimmed
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D
    Eof,
}

/// Source of REPL command lines
pub trait LineReader: Send + Sync {
    fn read_line(&self, prompt: &str) -> Result<LineInput, InteractionError>;
}

/// Interactive console implementation of the interaction port
pub struct ConsoleInteraction {
    editor: Mutex<Reedline>,
}

impl ConsoleInteraction {
    pub fn new(config: &ReplConfig) -> Self {
        let mut editor = Reedline::create();

        if let Some(path) = &config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => {
                    debug!("Using history file {}", path.display());
                    editor = editor.with_history(Box::new(history));
                }
                Err(e) => warn!("History disabled, cannot open {}: {}", path.display(), e),
            }
        }

        Self {
            editor: Mutex::new(editor),
        }
    }

    fn read(&self, prompt: &str, initial: Option<&str>) -> Result<LineInput, InteractionError> {
        let mut editor = self
            .editor
            .lock()
            .map_err(|_| InteractionError::Io("line editor lock poisoned".to_string()))?;

        if let Some(initial) = initial {
            editor.run_edit_commands(&[
                EditCommand::Clear,
                EditCommand::InsertString(initial.to_string()),
            ]);
        }

        let signal = editor
            .read_line(&LinePrompt::new(prompt))
            .map_err(|e| InteractionError::Io(e.to_string()))?;

        Ok(match signal {
            Signal::Success(line) => LineInput::Line(line.trim().to_string()),
            Signal::CtrlD => LineInput::Eof,
            _ => LineInput::Interrupted,
        })
    }

    fn answer(&self, prompt: &str, initial: Option<&str>) -> Result<String, InteractionError> {
        match self.read(prompt, initial)? {
            LineInput::Line(line) => Ok(line),
            LineInput::Interrupted | LineInput::Eof => Err(InteractionError::Cancelled),
        }
    }
}

impl LineReader for ConsoleInteraction {
    fn read_line(&self, prompt: &str) -> Result<LineInput, InteractionError> {
        self.read(prompt, None)
    }
}

#[async_trait]
impl InteractionPort for ConsoleInteraction {
    fn tell(&self, event: &SessionEvent) {
        println!("{}", ConsoleFormatter::event(event));
    }

    async fn ask(&self, prompt: &str) -> Result<String, InteractionError> {
        self.answer(prompt, None)
    }

    async fn ask_prefilled(&self, prompt: &str, initial: &str) -> Result<String, InteractionError> {
        self.answer(prompt, Some(initial))
    }
}
