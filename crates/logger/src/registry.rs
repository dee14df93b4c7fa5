//! Logger registry: shared color assignments and the optional log file

use crate::color::{Color, ASSIGNMENT_PALETTE};
use crate::logger::{Logger, Severity};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

pub(crate) struct RegistryInner {
    name_colors: HashMap<String, Color>,
    tag_colors: HashMap<String, Color>,
    /// Cursor into the assignment palette, shared by names and tags
    next_color: usize,
    min_level: Severity,
    /// Append-mode mirror for every rendered line
    pub(crate) mirror: Option<File>,
}

impl RegistryInner {
    fn assign_next(&mut self) -> Color {
        let color = ASSIGNMENT_PALETTE[self.next_color % ASSIGNMENT_PALETTE.len()];
        self.next_color += 1;
        color
    }

    pub(crate) fn name_color(&mut self, name: &str) -> Color {
        if let Some(&color) = self.name_colors.get(name) {
            return color;
        }
        let color = self.assign_next();
        self.name_colors.insert(name.to_string(), color);
        color
    }

    pub(crate) fn tag_color(&mut self, tag: &str) -> Color {
        if let Some(&color) = self.tag_colors.get(tag) {
            return color;
        }
        let color = self.assign_next();
        self.tag_colors.insert(tag.to_string(), color);
        color
    }

    pub(crate) fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_level
    }
}

/// Registry of named loggers
///
/// Cheap to clone; all clones (and every [`Logger`] created from them)
/// share color caches, the severity threshold, and the mirror file. The
/// same name or tag therefore always renders in the same color within a
/// process.
#[derive(Clone)]
pub struct LogRegistry {
    pub(crate) inner: Arc<Mutex<RegistryInner>>,
}

impl LogRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                name_colors: HashMap::new(),
                tag_colors: HashMap::new(),
                next_color: 0,
                min_level: Severity::Info,
                mirror: None,
            })),
        }
    }

    /// Create a logger, assigning its name color on first sight
    pub fn logger(&self, name: &str) -> Logger {
        self.inner.lock().name_color(name);
        Logger::new(name, self.clone())
    }

    /// Create a logger with an explicit name color
    pub fn logger_with_color(&self, name: &str, color: Color) -> Logger {
        self.inner.lock().name_colors.insert(name.to_string(), color);
        Logger::new(name, self.clone())
    }

    /// Pin a tag to an explicit color instead of the palette assignment
    pub fn set_tag_color(&self, tag: &str, color: Color) {
        self.inner.lock().tag_colors.insert(tag.to_string(), color);
    }

    /// Minimum severity rendered by all loggers (default: Info)
    pub fn set_level(&self, level: Severity) {
        self.inner.lock().min_level = level;
    }

    /// Mirror every subsequent log line to a file
    ///
    /// Opens the file in append mode. Loggers created before this call are
    /// covered too, since they render through the shared registry state.
    pub fn set_log_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        self.inner.lock().mirror = Some(file);
        Ok(())
    }

    /// Peek at the cached color for a tag, if one has been assigned
    pub fn tag_color(&self, tag: &str) -> Option<Color> {
        self.inner.lock().tag_colors.get(tag).copied()
    }

    /// Peek at the cached color for a logger name
    pub fn name_color(&self, name: &str) -> Option<Color> {
        self.inner.lock().name_colors.get(name).copied()
    }
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}
