//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the random source behind play sessions.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Session behavior configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fixed seed for the play order. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Creates a SessionConfig with a fixed play-order seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Creates a SessionConfig from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Build the random source for a play session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
