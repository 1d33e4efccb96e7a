//! REPL command parsing
//!
//! | Command | Aliases | Argument |
//! |---------|---------|----------|
//! | `help` | `h` | |
//! | `list` | | |
//! | `show` | | `<id>` |
//! | `add` | | |
//! | `delete` | | `<id>` |
//! | `edit` | | `<id>` |
//! | `test` | | `<id>` |
//! | `play` | `p` | |
//! | `credits` | | |
//! | `quit` | `q` | |
//!
//! Command words are case-insensitive. Extra words after the expected
//! argument are ignored.

use std::str::FromStr;
use thiserror::Error;
use trivia_domain::{DomainError, QuizId};

/// A parsed REPL command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Show(QuizId),
    Add,
    Delete(QuizId),
    Edit(QuizId),
    Test(QuizId),
    Play,
    Credits,
    Quit,
}

/// Errors from parsing a command line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Missing id parameter for '{0}'")]
    MissingId(&'static str),

    #[error(transparent)]
    InvalidId(#[from] DomainError),

    #[error("Unknown command: '{0}'. Type 'help' for the list of commands")]
    Unknown(String),

    #[error("Empty command line")]
    Empty,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?;
        let arg = words.next();

        let command = match word.to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "list" => Command::List,
            "show" => Command::Show(required_id("show", arg)?),
            "add" => Command::Add,
            "delete" => Command::Delete(required_id("delete", arg)?),
            "edit" => Command::Edit(required_id("edit", arg)?),
            "test" => Command::Test(required_id("test", arg)?),
            "play" | "p" => Command::Play,
            "credits" => Command::Credits,
            "quit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

fn required_id(command: &'static str, arg: Option<&str>) -> Result<QuizId, CommandError> {
    let arg = arg.ok_or(CommandError::MissingId(command))?;
    Ok(arg.parse::<QuizId>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands_and_aliases() {
        let cases = [
            ("help", Command::Help),
            ("h", Command::Help),
            ("list", Command::List),
            ("add", Command::Add),
            ("play", Command::Play),
            ("p", Command::Play),
            ("credits", Command::Credits),
            ("quit", Command::Quit),
            ("q", Command::Quit),
        ];
        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>().unwrap(), expected, "{}", line);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PLAY".parse::<Command>().unwrap(), Command::Play);
        assert_eq!("  Show   2 ".parse::<Command>().unwrap(), Command::Show(QuizId::new(2)));
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!("show 0".parse::<Command>().unwrap(), Command::Show(QuizId::new(0)));
        assert_eq!("delete 3".parse::<Command>().unwrap(), Command::Delete(QuizId::new(3)));
        assert_eq!("edit 1".parse::<Command>().unwrap(), Command::Edit(QuizId::new(1)));
        assert_eq!("test 12".parse::<Command>().unwrap(), Command::Test(QuizId::new(12)));
    }

    #[test]
    fn test_extra_words_are_ignored() {
        assert_eq!("list everything".parse::<Command>().unwrap(), Command::List);
        assert_eq!("test 1 2".parse::<Command>().unwrap(), Command::Test(QuizId::new(1)));
    }

    #[test]
    fn test_missing_id() {
        assert_eq!(
            "test".parse::<Command>().unwrap_err(),
            CommandError::MissingId("test")
        );
        assert_eq!(
            "delete".parse::<Command>().unwrap_err(),
            CommandError::MissingId("delete")
        );
    }

    #[test]
    fn test_invalid_id() {
        for line in ["show abc", "show -1", "edit 1.5", "test +2"] {
            let err = line.parse::<Command>().unwrap_err();
            assert!(
                matches!(err, CommandError::InvalidId(DomainError::InvalidId(_))),
                "{}: {:?}",
                line,
                err
            );
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "dance".parse::<Command>().unwrap_err(),
            CommandError::Unknown("dance".to_string())
        );
    }

    #[test]
    fn test_unknown_command_keeps_original_spelling() {
        let err = "Dance 3".parse::<Command>().unwrap_err();
        assert_eq!(err, CommandError::Unknown("Dance".to_string()));
        assert!(err.to_string().contains("'Dance'"));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!("   ".parse::<Command>().unwrap_err(), CommandError::Empty);
    }
}
