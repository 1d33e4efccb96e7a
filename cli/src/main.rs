//! CLI entrypoint for Trivia Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trivia_application::SessionConfig;
use trivia_infrastructure::{ConfigLoader, FileConfig, FilePlayConfig, seed_store};
use trivia_presentation::{Cli, ConsoleInteraction, OutputConfig, QuizRepl, ReplConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging: RUST_LOG wins, otherwise verbosity level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    info!("Starting Trivia Quiz");

    // Color: --no-color, NO_COLOR, then [output] color
    let output = OutputConfig {
        color: config.output.color && !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
    };
    output.apply();

    let session = session_config(cli.seed, &config.play);

    let history_file = match &config.repl.history_file {
        Some(path) => Some(expand_home(path)),
        None => ConfigLoader::default_history_path(),
    };
    let repl_config = ReplConfig::default()
        .with_prompt(config.repl.prompt.clone())
        .with_history_file(history_file);

    // === Dependency Injection ===
    let store = seed_store(&config.deck);
    let console = Arc::new(ConsoleInteraction::new(&repl_config));
    let mut repl = QuizRepl::new(store, console, &session, &repl_config);

    repl.run().await.context("Terminal input failed")?;

    Ok(())
}

/// `--seed` overrides `[play] seed`
fn session_config(cli_seed: Option<u64>, play: &FilePlayConfig) -> SessionConfig {
    match cli_seed {
        Some(seed) => SessionConfig::with_seed(seed),
        None => play.to_session_config(),
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
