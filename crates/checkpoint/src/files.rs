//! Checkpoint file manager
//!
//! Read-only ID-indexed view over the checkpoint files inside a single
//! directory. Files are named `checkpoint_<id>.<ext>`; the manager locates
//! a base file during lineage copies and answers diagnostic queries. It
//! never creates or deletes anything.

use crate::dirs::{summarize, Summary};
use crate::error::{CheckpointError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// View over `checkpoint_<id>.<ext>` files in one directory
pub struct CheckpointFileManager {
    dir: PathBuf,
    by_id: BTreeMap<u64, Vec<String>>,
}

impl CheckpointFileManager {
    /// Scan an existing directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let mut manager = Self {
            dir: dir.as_ref().to_path_buf(),
            by_id: BTreeMap::new(),
        };
        manager.refresh()?;
        Ok(manager)
    }

    /// Re-scan the directory
    ///
    /// Candidates are names containing `checkpoint`, with the ID parsed
    /// from the stem after the first `_`. Names without a numeric ID
    /// (e.g. `checkpoint_best.pt`) are skipped, not errors.
    pub fn refresh(&mut self) -> Result<()> {
        let mut by_id: BTreeMap<u64, Vec<String>> = BTreeMap::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !file_name.contains("checkpoint") {
                continue;
            }
            match parse_file_id(&file_name) {
                Some(id) => by_id.entry(id).or_default().push(file_name),
                None => {
                    debug!(name = %file_name, "skipping checkpoint file without numeric id")
                }
            }
        }
        self.by_id = by_id;
        Ok(())
    }

    /// Directory under view
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of IDs in the namespace
    pub fn count(&self) -> usize {
        self.by_id.len()
    }

    /// Resolved path for a file ID
    pub fn path_by_id(&self, id: u64) -> Result<PathBuf> {
        let names = self
            .by_id
            .get(&id)
            .ok_or(CheckpointError::NotFound(id))?;
        if names.len() > 1 {
            return Err(CheckpointError::DuplicateId {
                id,
                names: names.clone(),
            });
        }
        Ok(self.dir.join(&names[0]))
    }

    /// Maximum existing file ID
    pub fn last_id(&self) -> Result<u64> {
        self.by_id
            .keys()
            .last()
            .copied()
            .ok_or_else(|| CheckpointError::EmptyNamespace(self.dir.clone()))
    }

    /// Path of the maximum existing file ID
    pub fn last_path(&self) -> Result<PathBuf> {
        self.path_by_id(self.last_id()?)
    }

    /// Min/max/missing/duplicate diagnostic; `None` when no files exist
    pub fn summary(&self) -> Option<Summary> {
        summarize(&self.by_id)
    }
}

/// Parse the ID out of `checkpoint_<id>.<ext>`
///
/// The stem (name up to the last `.`) is split at the first `_` and the
/// remainder must parse as an integer.
fn parse_file_id(file_name: &str) -> Option<u64> {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    let (_, id) = stem.split_once('_')?;
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn parses_file_ids() {
        assert_eq!(parse_file_id("checkpoint_15.ckpt"), Some(15));
        assert_eq!(parse_file_id("checkpoint_15"), Some(15));
        assert_eq!(parse_file_id("checkpoint_best.pt"), None);
        assert_eq!(parse_file_id("checkpoint"), None);
    }

    #[test]
    fn scans_only_checkpoint_files() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "checkpoint_1.ckpt");
        touch(tmp.path(), "checkpoint_5.ckpt");
        touch(tmp.path(), "config.yaml");
        touch(tmp.path(), "checkpoint_best.pt");

        let mgr = CheckpointFileManager::open(tmp.path()).unwrap();
        assert_eq!(mgr.count(), 2);
        assert_eq!(mgr.last_id().unwrap(), 5);
        assert_eq!(
            mgr.last_path().unwrap().file_name().unwrap(),
            "checkpoint_5.ckpt"
        );
    }

    #[test]
    fn missing_id_fails_not_found() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "checkpoint_1.ckpt");
        let mgr = CheckpointFileManager::open(tmp.path()).unwrap();

        let err = mgr.path_by_id(2).unwrap_err();
        assert!(matches!(err, CheckpointError::NotFound(2)));
    }

    #[test]
    fn duplicate_ids_fail_on_lookup() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "checkpoint_3.ckpt");
        touch(tmp.path(), "checkpoint_3.pt");
        let mgr = CheckpointFileManager::open(tmp.path()).unwrap();

        let err = mgr.path_by_id(3).unwrap_err();
        assert!(matches!(err, CheckpointError::DuplicateId { id: 3, .. }));

        let summary = mgr.summary().unwrap();
        assert_eq!(summary.duplicates, vec![3]);
    }

    #[test]
    fn empty_directory_has_no_last() {
        let tmp = tempdir().unwrap();
        let mgr = CheckpointFileManager::open(tmp.path()).unwrap();

        assert!(mgr.summary().is_none());
        let err = mgr.last_id().unwrap_err();
        assert!(matches!(err, CheckpointError::EmptyNamespace(_)));
    }
}
