//! Console output formatter for quiz sessions and deck listings

use colored::Colorize;
use trivia_application::SessionEvent;
use trivia_domain::{QuizId, QuizItem, Verdict};

/// Formats session events and REPL messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one session event as a single line
    pub fn event(event: &SessionEvent) -> String {
        match event {
            SessionEvent::Verdict(verdict) => {
                format!("Your answer is {}", Self::verdict(*verdict))
            }
            SessionEvent::NoMoreQuestions => "No more questions.".yellow().to_string(),
            SessionEvent::FinalScore { score, total } => format!(
                "End of quiz. Score: {}",
                format!("{} of {}", score, total).blue().bold()
            ),
            SessionEvent::QuizAdded { id, item } => {
                format!("{} {}", "Added".magenta(), Self::entry(*id, item))
            }
            SessionEvent::QuizUpdated { id, item } => format!(
                "Quiz {} changed to: {}",
                id.to_string().magenta(),
                Self::pair(item)
            ),
        }
    }

    fn verdict(verdict: Verdict) -> String {
        match verdict {
            Verdict::Correct => verdict.as_str().green().bold().to_string(),
            Verdict::Incorrect => verdict.as_str().red().bold().to_string(),
        }
    }

    /// `[id]: question` line for `list`
    pub fn list_entry(id: QuizId, item: &QuizItem) -> String {
        format!("  [{}]: {}", id.to_string().magenta(), item.question)
    }

    /// `[id]: question => answer` line for `show`
    pub fn entry(id: QuizId, item: &QuizItem) -> String {
        format!("[{}]: {}", id.to_string().magenta(), Self::pair(item))
    }

    pub fn deleted(id: QuizId, item: &QuizItem) -> String {
        format!("{} {}", "Deleted".magenta(), Self::entry(id, item))
    }

    fn pair(item: &QuizItem) -> String {
        format!("{} {} {}", item.question, "=>".magenta(), item.answer)
    }

    /// Deck listing, or a hint when the deck is empty
    pub fn list(entries: &[(QuizId, QuizItem)]) -> String {
        if entries.is_empty() {
            return "  (no quizzes, use 'add' to create one)".dimmed().to_string();
        }
        entries
            .iter()
            .map(|(id, item)| Self::list_entry(*id, item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn error(message: impl std::fmt::Display) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn cancelled() -> String {
        "Cancelled.".dimmed().to_string()
    }

    pub fn help() -> String {
        let commands = [
            ("help, h", "Show this help"),
            ("list", "List all quizzes"),
            ("show <id>", "Show a quiz with its answer"),
            ("add", "Add a new quiz"),
            ("delete <id>", "Delete a quiz"),
            ("edit <id>", "Edit a quiz"),
            ("test <id>", "Answer a single quiz"),
            ("play, p", "Answer all quizzes in random order"),
            ("credits", "Show the authors"),
            ("quit, q", "Exit"),
        ];

        let mut output = format!("{}\n", "Commands:".bold());
        for (usage, description) in commands {
            output.push_str(&format!("  {:<14}- {}\n", usage.cyan(), description));
        }
        output.push_str(&format!(
            "{}",
            "Ids are positions in the list; deleting a quiz renumbers the ones after it.".dimmed()
        ));
        output
    }

    pub fn credits() -> String {
        format!(
            "{}\n  {} v{}\n  {}",
            "Credits:".bold(),
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_AUTHORS").replace(':', ", ")
        )
    }

    pub fn welcome(quiz_count: usize) -> String {
        let line = "─".repeat(45);
        format!(
            "{}\n{:^45}\n{}\n{} quizzes loaded. Type {} for the list of commands.",
            line.cyan(),
            "Trivia Quiz".bold(),
            line.cyan(),
            quiz_count,
            "help".cyan()
        )
    }

    pub fn farewell() -> String {
        "Bye!".to_string()
    }
}
