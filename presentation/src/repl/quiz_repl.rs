//! REPL (Read-Eval-Print Loop) over the quiz deck

use super::command::{Command, CommandError};
use super::interaction::{LineInput, LineReader};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use std::sync::Arc;
use tracing::{debug, error, info};
use trivia_application::{
    InteractionError, InteractionPort, ManageQuizUseCase, PlayQuizUseCase, SessionConfig,
    TestQuizUseCase,
};
use trivia_domain::QuizStore;

/// Interactive quiz REPL
///
/// Owns the store for the lifetime of the process. Sessions borrow it
/// shared and deck mutations borrow it exclusively, so a command never
/// starts while another one still holds the deck.
pub struct QuizRepl<P: InteractionPort + LineReader + 'static> {
    store: QuizStore,
    port: Arc<P>,
    manage: ManageQuizUseCase<P>,
    test: TestQuizUseCase<P>,
    play: PlayQuizUseCase<P>,
    prompt: String,
}

impl<P: InteractionPort + LineReader + 'static> QuizRepl<P> {
    pub fn new(
        store: QuizStore,
        port: Arc<P>,
        session: &SessionConfig,
        repl: &ReplConfig,
    ) -> Self {
        Self {
            store,
            manage: ManageQuizUseCase::new(port.clone()),
            test: TestQuizUseCase::new(port.clone()),
            play: PlayQuizUseCase::from_config(port.clone(), session),
            port,
            prompt: repl.prompt.clone(),
        }
    }

    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    /// Run the interactive REPL until `quit` or Ctrl-D
    ///
    /// Command errors are printed and the loop carries on. Only a failure
    /// to read from the terminal ends it early.
    pub async fn run(&mut self) -> Result<(), InteractionError> {
        println!("{}", ConsoleFormatter::welcome(self.store.count()));

        loop {
            let line = match self.port.read_line(&self.prompt) {
                Ok(LineInput::Line(line)) => line,
                Ok(LineInput::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Ok(LineInput::Eof) => {
                    println!("{}", ConsoleFormatter::farewell());
                    break;
                }
                Err(e) => {
                    error!("Failed to read command: {}", e);
                    return Err(e);
                }
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    debug!("Rejected command line '{}': {}", line, e);
                    println!("{}", ConsoleFormatter::error(&e));
                    continue;
                }
            };

            match self.handle_command(command).await {
                CommandResult::Exit => break,
                CommandResult::Continue => continue,
            }
        }

        info!("REPL finished with {} quizzes", self.store.count());
        Ok(())
    }

    /// Handle one command. Returns whether to continue or exit.
    async fn handle_command(&mut self, command: Command) -> CommandResult {
        debug!("Command: {:?}", command);

        match command {
            Command::Help => println!("{}", ConsoleFormatter::help()),
            Command::List => println!("{}", ConsoleFormatter::list(&self.store.get_all())),
            Command::Show(id) => match self.store.get_by_index(id) {
                Ok(item) => println!("{}", ConsoleFormatter::entry(id, item)),
                Err(e) => println!("{}", ConsoleFormatter::error(e)),
            },
            Command::Add => {
                if let Err(e) = self.manage.add(&mut self.store).await {
                    report(&e, e.is_cancelled());
                }
            }
            Command::Delete(id) => match self.store.delete_by_index(id) {
                Ok(item) => {
                    info!("Deleted quiz {}", id);
                    println!("{}", ConsoleFormatter::deleted(id, &item));
                }
                Err(e) => println!("{}", ConsoleFormatter::error(e)),
            },
            Command::Edit(id) => {
                if let Err(e) = self.manage.edit(&mut self.store, id).await {
                    report(&e, e.is_cancelled());
                }
            }
            Command::Test(id) => {
                if let Err(e) = self.test.execute(&self.store, id).await {
                    report(&e, e.is_cancelled());
                }
            }
            Command::Play => {
                if let Err(e) = self.play.execute(&self.store).await {
                    report(&e, e.is_cancelled());
                }
            }
            Command::Credits => println!("{}", ConsoleFormatter::credits()),
            Command::Quit => {
                println!("{}", ConsoleFormatter::farewell());
                return CommandResult::Exit;
            }
        }

        CommandResult::Continue
    }
}

fn report(err: &dyn std::fmt::Display, cancelled: bool) {
    if cancelled {
        println!("{}", ConsoleFormatter::cancelled());
    } else {
        println!("{}", ConsoleFormatter::error(err));
    }
}

/// Result of handling a command
enum CommandResult {
    Continue,
    Exit,
}
