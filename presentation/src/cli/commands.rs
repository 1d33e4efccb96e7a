//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-quiz
#[derive(Parser, Debug)]
#[command(name = "trivia-quiz")]
#[command(author, version, about = "Interactive trivia quiz in the terminal")]
#[command(long_about = r#"
Trivia Quiz keeps a deck of question/answer pairs and quizzes you on them.

Inside the REPL:
  list, show <id>, add, delete <id>, edit <id>   manage the deck
  test <id>                                      answer a single quiz
  play                                           answer the whole deck in random order

Configuration files are loaded from (in priority order):
1. TRIVIA_<SECTION>__<KEY>   Environment variables
2. --config <path>           Explicit config file
3. ./trivia.toml             Project-level config
4. ~/.config/trivia-quiz/config.toml   Global config

Example:
  trivia-quiz
  trivia-quiz --seed 42 --no-color
  trivia-quiz --config ./capitals.toml -vv
"#)]
pub struct Cli {
    /// Seed for the play order (makes `play` reproducible)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
