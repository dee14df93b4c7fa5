//! Checkpoint directory and file management
//!
//! This crate provides:
//! - Directory manager: integer-ID namespace over a checkpoint root
//!   (allocation, lookup, lineage copy, deletion, empty-dir pruning)
//! - File manager: read-only ID-indexed view over `checkpoint_<id>.<ext>`
//!   files inside a single directory
//! - Name codec for `{id:03}[_description][_base_{id:03}][_iter_{n}]`
//!
//! All operations are synchronous and assume a single writer per root.

pub mod dirs;
pub mod error;
pub mod files;
pub mod name;

// Re-exports
pub use dirs::{CheckpointDirManager, PrunePolicy, Summary};
pub use error::{CheckpointError, Result};
pub use files::CheckpointFileManager;
pub use name::DirName;
