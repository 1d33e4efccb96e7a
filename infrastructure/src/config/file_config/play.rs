//! Play configuration from TOML (`[play]` section)

use serde::{Deserialize, Serialize};
use trivia_application::SessionConfig;

/// Raw play-session configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlayConfig {
    /// Fixed seed for the question order (reproducible sessions)
    pub seed: Option<u64>,
}

impl FilePlayConfig {
    /// Convert to application config
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig::from_seed(self.seed)
    }
}
