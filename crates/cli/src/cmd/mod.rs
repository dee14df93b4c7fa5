//! CLI command implementations

pub mod config;
pub mod files;
pub mod last;
pub mod new;
pub mod path;
pub mod prune;
pub mod rm;
pub mod rm_until;
pub mod status;
