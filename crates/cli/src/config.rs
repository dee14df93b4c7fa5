//! User configuration
//!
//! Optional TOML file at `{config_dir}/labkit/config.toml` supplying
//! defaults that CLI flags override.

use anyhow::{Context, Result};
use checkpoint::PrunePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Default checkpoint root
    pub root: Option<PathBuf>,
    /// Default log mirror file
    pub log_file: Option<PathBuf>,
    /// What counts as payload when pruning
    pub prune: Option<PrunePolicy>,
}

/// Location of the config file, if a config directory exists
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("labkit").join("config.toml"))
}

/// Load the config file, or defaults when it does not exist
pub fn load() -> Result<UserConfig> {
    let Some(path) = config_file_path() else {
        return Ok(UserConfig::default());
    };
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Invalid config file at {}", path.display()))
}

/// Annotated example configuration
pub fn example_config() -> &'static str {
    r#"# Labkit configuration
# Place at {config_dir}/labkit/config.toml

# Default checkpoint root (overridden by --root)
# root = "/data/experiments/checkpoints"

# Mirror command logging to a file (overridden by --log-file)
# log_file = "/data/experiments/ckpt.log"

# What does NOT count as payload when pruning empty directories
# [prune]
# config_extensions = ["yaml"]
# aux_dirs = ["log", "wandb"]
"#
}
