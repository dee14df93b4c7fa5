//! Shared state for CLI commands

use crate::config::{self, UserConfig};
use anyhow::{Context, Result};
use checkpoint::{CheckpointDirManager, PrunePolicy};
use logger::{LogRegistry, Logger};
use std::path::PathBuf;

/// Resolved settings plus the logging handles every command uses
pub struct CommandContext {
    root: PathBuf,
    policy: PrunePolicy,
    pub config: UserConfig,
    pub logger: Logger,
}

impl CommandContext {
    /// Resolve flags against the config file and set up logging
    pub fn load(root_flag: Option<PathBuf>, log_file_flag: Option<PathBuf>) -> Result<Self> {
        let config = config::load()?;

        let root = root_flag
            .or_else(|| config.root.clone())
            .unwrap_or_else(|| PathBuf::from("checkpoints"));
        let policy = config.prune.clone().unwrap_or_default();

        let registry = LogRegistry::new();
        if let Some(log_file) = log_file_flag.or_else(|| config.log_file.clone()) {
            registry
                .set_log_file(&log_file)
                .with_context(|| format!("Failed to open log file at {}", log_file.display()))?;
        }
        let logger = registry.logger("ckpt");

        Ok(Self {
            root,
            policy,
            config,
            logger,
        })
    }

    /// Checkpoint root as resolved from flags and config
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn policy(&self) -> &PrunePolicy {
        &self.policy
    }

    /// Open the directory manager over the resolved root
    pub fn open_manager(&self) -> Result<CheckpointDirManager> {
        CheckpointDirManager::open_with_policy(&self.root, self.policy.clone())
            .with_context(|| format!("Failed to open checkpoint root at {}", self.root.display()))
    }
}
