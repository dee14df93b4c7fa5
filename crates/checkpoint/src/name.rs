//! Directory name codec
//!
//! Checkpoint directories are named `{id:03}[_description][_base_{id:03}][_iter_{n}]`.
//! The leading segment (up to the first `_`, or the whole name) is the ID;
//! everything after it is free-form browsing metadata fixed at creation time.

use std::fmt;

/// Components of a checkpoint directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirName {
    /// Integer ID, zero-padded to 3 digits when rendered
    pub id: u64,
    /// Optional free-text description
    pub description: Option<String>,
    /// Optional lineage: ID of the base directory this one was seeded from
    pub base_id: Option<u64>,
    /// Optional lineage: numbered checkpoint file within the base
    pub base_iter: Option<u64>,
}

impl DirName {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            description: None,
            base_id: None,
            base_iter: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        if !description.is_empty() {
            self.description = Some(description.to_string());
        }
        self
    }

    pub fn with_base(mut self, base_id: Option<u64>, base_iter: Option<u64>) -> Self {
        self.base_id = base_id;
        self.base_iter = base_iter;
        self
    }

    /// Render the directory name
    pub fn render(&self) -> String {
        let mut name = format!("{:03}", self.id);
        if let Some(description) = &self.description {
            name.push('_');
            name.push_str(description);
        }
        if let Some(base_id) = self.base_id {
            name.push_str(&format!("_base_{:03}", base_id));
        }
        if let Some(base_iter) = self.base_iter {
            name.push_str(&format!("_iter_{}", base_iter));
        }
        name
    }
}

impl fmt::Display for DirName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parse the ID from a directory name
///
/// The segment before the first `_` (or the whole name) must be purely
/// numeric. Returns `None` for names that do not belong to the namespace.
pub fn parse_id(name: &str) -> Option<u64> {
    let head = name.split('_').next().unwrap_or(name);
    if head.is_empty() || !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    head.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_id_only() {
        assert_eq!(DirName::new(1).render(), "001");
        assert_eq!(DirName::new(42).render(), "042");
        // 4-digit IDs grow past the padding
        assert_eq!(DirName::new(1234).render(), "1234");
    }

    #[test]
    fn render_full() {
        let name = DirName::new(2)
            .with_description("b")
            .with_base(Some(1), Some(7));
        assert_eq!(name.render(), "002_b_base_001_iter_7");
    }

    #[test]
    fn render_skips_empty_description() {
        let name = DirName::new(3).with_description("");
        assert_eq!(name.render(), "003");
    }

    #[test]
    fn parse_valid_names() {
        assert_eq!(parse_id("001"), Some(1));
        assert_eq!(parse_id("001_a"), Some(1));
        assert_eq!(parse_id("002_b_base_001"), Some(2));
        assert_eq!(parse_id("120_long_description_iter_3"), Some(120));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(parse_id("notes"), None);
        assert_eq!(parse_id("a_001"), None);
        assert_eq!(parse_id("_001"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("1x_foo"), None);
    }
}
