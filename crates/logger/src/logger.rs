//! Logger handles and line rendering

use crate::color::{paint, Color};
use crate::registry::LogRegistry;
use std::io::Write;

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// A named logger bound to a [`LogRegistry`]
///
/// Every call site supplies its own identity tag; the tag's color is
/// assigned by the registry on first sight and reused afterwards. Lines
/// render as `[{time}][{name}][{tag}] LEVEL: message` on stderr, mirrored
/// verbatim to the registry's log file when one is configured.
pub struct Logger {
    name: String,
    registry: LogRegistry,
}

impl Logger {
    pub(crate) fn new(name: &str, registry: LogRegistry) -> Self {
        Self {
            name: name.to_string(),
            registry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Info message, cyan body
    pub fn i(&self, tag: &str, message: &str) {
        self.log(Severity::Info, tag, Some(Color::CYAN), message);
    }

    /// Warning message, yellow body
    pub fn w(&self, tag: &str, message: &str) {
        self.log(Severity::Warn, tag, Some(Color::YELLOW), message);
    }

    /// Error message, red body
    pub fn e(&self, tag: &str, message: &str) {
        self.log(Severity::Error, tag, Some(Color::RED), message);
    }

    /// Debug message, uncolored body
    pub fn d(&self, tag: &str, message: &str) {
        self.log(Severity::Debug, tag, None, message);
    }

    /// Test message: debug content at info severity, green body, so it
    /// shows up by default and is easy to grep for in code
    pub fn t(&self, tag: &str, message: &str) {
        self.log(Severity::Info, tag, Some(Color::GREEN), message);
    }

    fn log(&self, severity: Severity, tag: &str, body_color: Option<Color>, message: &str) {
        let mut inner = self.registry.inner.lock();
        if !inner.enabled(severity) {
            return;
        }

        let name_color = inner.name_color(&self.name);
        let tag_color = inner.tag_color(tag);
        let body = match body_color {
            Some(color) => paint(message, color),
            None => message.to_string(),
        };
        let line = format!(
            "[{}][{}][{}] {}: {}",
            chrono::Local::now().format("%m-%d %H:%M:%S"),
            paint(&self.name, name_color),
            paint(tag, tag_color),
            severity.label(),
            body
        );

        eprintln!("{line}");
        if let Some(file) = inner.mirror.as_mut() {
            // mirroring is best-effort; a full disk should not kill logging
            let _ = writeln!(file, "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn mirror_receives_rendered_lines() {
        let tmp = tempdir().unwrap();
        let log_path = tmp.path().join("run.log");
        let registry = LogRegistry::new();
        let logger = registry.logger("train");

        registry.set_log_file(&log_path).unwrap();
        logger.i("Trainer", "epoch 1 done");
        logger.e("Trainer", "loss diverged");

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("epoch 1 done"));
        assert!(content.contains("loss diverged"));
        assert!(content.contains("INFO"));
        assert!(content.contains("ERROR"));
        assert!(content.contains("[\x1b[38;5;"));
    }

    #[test]
    fn mirror_covers_loggers_created_before_configuration() {
        let tmp = tempdir().unwrap();
        let log_path = tmp.path().join("late.log");
        let registry = LogRegistry::new();
        // created before the file exists
        let logger = registry.logger("early");

        logger.i("Setup", "not mirrored");
        registry.set_log_file(&log_path).unwrap();
        logger.i("Setup", "mirrored");

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(!content.contains("not mirrored"));
        assert!(content.contains("mirrored"));
    }

    #[test]
    fn debug_is_filtered_at_default_level() {
        let tmp = tempdir().unwrap();
        let log_path = tmp.path().join("filter.log");
        let registry = LogRegistry::new();
        let logger = registry.logger("train");
        registry.set_log_file(&log_path).unwrap();

        logger.d("Trainer", "hidden");
        logger.t("Trainer", "visible");

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(!content.contains("hidden"));
        assert!(content.contains("visible"));

        registry.set_level(Severity::Debug);
        logger.d("Trainer", "now shown");
        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("now shown"));
    }
}
