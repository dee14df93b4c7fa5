//! Colorized, tag-scoped logging
//!
//! This crate provides:
//! - A registry of named loggers with per-name and per-tag terminal colors,
//!   assigned on first sight and stable for the life of the registry
//! - Short severity methods (`i`/`w`/`e`/`d`/`t`) taking an explicit
//!   caller-supplied identity tag
//! - Optional mirroring of every log line to a file, applied retroactively
//!   to loggers created before the file was configured
//!
//! The registry is an explicit object; clone it and hand it to whatever
//! needs to create loggers. There is no process-global state.

pub mod color;
pub mod logger;
pub mod registry;

// Re-exports
pub use color::{paint, Color};
pub use logger::{Logger, Severity};
pub use registry::LogRegistry;
