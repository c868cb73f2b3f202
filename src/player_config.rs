//! Player selection loaded from the simulation's YAML config.
//!
//! Only the keys relevant to building a player are read; any other sections
//! of a larger simulation config are silently ignored.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::players::PlayerKind;

/// Which player to build, and how to seed its construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Strategy to run (defaults to the projection player).
    #[serde(default)]
    pub player: PlayerKind,

    /// Seed for the projection matrix; `None` draws from OS entropy.
    #[serde(default)]
    pub projection_seed: Option<u64>,
}

/// Load a `PlayerConfig` from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlayerConfig> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
    let config: PlayerConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
    Ok(config)
}
