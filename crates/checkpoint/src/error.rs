//! Error taxonomy for checkpoint operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the directory and file managers
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// No entry carries the requested ID
    #[error("checkpoint with id {0} not found")]
    NotFound(u64),

    /// No entry name contains the requested substring
    #[error("no checkpoint matching description '{0}'")]
    DescriptionNotFound(String),

    /// More than one entry carries the same ID
    #[error("multiple checkpoints with id {id}: {names:?}")]
    DuplicateId { id: u64, names: Vec<String> },

    /// More than one entry name contains the substring
    #[error("multiple checkpoints matching description '{description}': {names:?}")]
    DuplicateDescription {
        description: String,
        names: Vec<String>,
    },

    /// Allocation collision for an explicit ID
    #[error("checkpoint with id {0} already exists")]
    AlreadyExists(u64),

    /// An operation needing a "last" entry found none
    #[error("no checkpoints found at {}", .0.display())]
    EmptyNamespace(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for checkpoint operations
pub type Result<T, E = CheckpointError> = std::result::Result<T, E>;
