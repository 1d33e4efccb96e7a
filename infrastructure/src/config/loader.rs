//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "trivia-quiz";
const PROJECT_FILES: [&str; 2] = ["trivia.toml", ".trivia.toml"];
const ENV_PREFIX: &str = "TRIVIA_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `TRIVIA_<SECTION>__<KEY>` (e.g. `TRIVIA_PLAY__SEED=7`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./trivia.toml` or `./.trivia.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/trivia-quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Loading project config from {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!("Loading explicit config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/trivia-quiz/config.toml if set,
    /// otherwise the platform's config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default location of the REPL history file
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Describe every configuration layer, highest priority first
    pub fn config_sources(explicit: Option<&Path>) -> Vec<String> {
        let mut lines = vec![format!("  [     ] Env:      {}<SECTION>__<KEY>", ENV_PREFIX)];

        match explicit {
            Some(path) if path.exists() => {
                lines.push(format!("  [FOUND] Explicit: {}", path.display()))
            }
            Some(path) => lines.push(format!("  [MISSING] Explicit: {}", path.display())),
            None => lines.push("  [     ] Explicit: --config <path>".to_string()),
        }

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project:  {}", path.display()));
        } else {
            lines.push("  [     ] Project:  ./trivia.toml or ./.trivia.toml".to_string());
        }

        if let Some(path) = Self::global_config_path() {
            let status = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:   {}", status, path.display()));
        }

        lines.push("  [     ] Default:  built-in defaults".to_string());
        lines
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(explicit) {
            println!("{}", line);
        }
    }
}
