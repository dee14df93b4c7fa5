//! Checkpoint directory manager
//!
//! Maps a stable integer ID namespace onto an unordered filesystem listing.
//! Children of the root are named `{id:03}[_description][_base_{id:03}][_iter_{n}]`;
//! the manager rebuilds its ID index from the listing on every mutation.
//! Single writer per root is assumed; there is no cross-process locking.

use crate::error::{CheckpointError, Result};
use crate::files::CheckpointFileManager;
use crate::name::{self, DirName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What counts as "no payload" when pruning
///
/// A directory is empty when every entry is either a configuration file
/// (recognized by extension) or one of the known auxiliary directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrunePolicy {
    /// Extensions of configuration files that do not count as payload
    pub config_extensions: Vec<String>,
    /// Auxiliary entry names (log output, experiment-tracking metadata)
    pub aux_dirs: Vec<String>,
}

impl Default for PrunePolicy {
    fn default() -> Self {
        Self {
            config_extensions: vec!["yaml".to_string()],
            aux_dirs: vec!["log".to_string(), "wandb".to_string()],
        }
    }
}

impl PrunePolicy {
    /// Whether a single entry name counts as payload
    fn is_payload(&self, entry_name: &str) -> bool {
        if self.aux_dirs.iter().any(|aux| aux == entry_name) {
            return false;
        }
        if let Some((_, ext)) = entry_name.rsplit_once('.') {
            if self.config_extensions.iter().any(|e| e == ext) {
                return false;
            }
        }
        true
    }
}

/// Diagnostic view of the ID namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub min_id: u64,
    pub max_id: u64,
    /// IDs absent from the contiguous span [min, max]
    pub missing: Vec<u64>,
    /// IDs carried by more than one entry
    pub duplicates: Vec<u64>,
}

pub(crate) fn summarize(by_id: &BTreeMap<u64, Vec<String>>) -> Option<Summary> {
    let min_id = *by_id.keys().next()?;
    let max_id = *by_id.keys().last()?;
    let missing = (min_id..=max_id)
        .filter(|id| !by_id.contains_key(id))
        .collect();
    let duplicates = by_id
        .iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(&id, _)| id)
        .collect();
    Some(Summary {
        count: by_id.len(),
        min_id,
        max_id,
        missing,
        duplicates,
    })
}

/// Manager for a root directory of ID-named checkpoint directories
pub struct CheckpointDirManager {
    /// Canonicalized checkpoint root
    root: PathBuf,
    /// Child names in the namespace, sorted
    names: Vec<String>,
    /// ID -> directory names carrying it (more than one is a corruption)
    by_id: BTreeMap<u64, Vec<String>>,
    policy: PrunePolicy,
}

impl CheckpointDirManager {
    /// Open a checkpoint root, creating it if needed
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_policy(root, PrunePolicy::default())
    }

    /// Open with an explicit prune policy
    pub fn open_with_policy(root: impl AsRef<Path>, policy: PrunePolicy) -> Result<Self> {
        fs::create_dir_all(root.as_ref())?;
        let root = fs::canonicalize(root.as_ref())?;
        let mut manager = Self {
            root,
            names: Vec::new(),
            by_id: BTreeMap::new(),
            policy,
        };
        manager.refresh()?;
        Ok(manager)
    }

    /// Re-read the directory listing and rebuild the ID index
    ///
    /// Names whose leading segment is not purely numeric are outside the
    /// namespace and ignored. Duplicate IDs are kept in the index; lookups
    /// and [`Self::summary`] report them instead of picking one.
    pub fn refresh(&mut self) -> Result<()> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if name::parse_id(&file_name).is_some() {
                names.push(file_name);
            }
        }
        names.sort();

        let mut by_id: BTreeMap<u64, Vec<String>> = BTreeMap::new();
        for file_name in &names {
            // parse_id succeeded above
            if let Some(id) = name::parse_id(file_name) {
                by_id.entry(id).or_default().push(file_name.clone());
            }
        }

        debug!(root = %self.root.display(), entries = names.len(), "scanned checkpoint root");
        self.names = names;
        self.by_id = by_id;
        Ok(())
    }

    /// Checkpoint root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of IDs in the namespace
    pub fn count(&self) -> usize {
        self.by_id.len()
    }

    /// Resolved path for an ID
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
        Ok(self.root.join(&names[0]))
    }

    /// Resolved path for the unique directory name containing a substring
    pub fn path_by_description(&self, description: &str) -> Result<PathBuf> {
        let matches: Vec<&String> = self
            .names
            .iter()
            .filter(|name| name.contains(description))
            .collect();
        match matches.len() {
            0 => Err(CheckpointError::DescriptionNotFound(
                description.to_string(),
            )),
            1 => Ok(self.root.join(matches[0])),
            _ => Err(CheckpointError::DuplicateDescription {
                description: description.to_string(),
                names: matches.into_iter().cloned().collect(),
            }),
        }
    }

    /// Combined lookup: purely numeric input is an ID, anything else a description
    pub fn resolve(&self, id_or_description: &str) -> Result<PathBuf> {
        let is_numeric = !id_or_description.is_empty()
            && id_or_description.bytes().all(|b| b.is_ascii_digit());
        if is_numeric {
            if let Ok(id) = id_or_description.parse() {
                return self.path_by_id(id);
            }
        }
        self.path_by_description(id_or_description)
    }

    /// Maximum existing ID
    pub fn last_id(&self) -> Result<u64> {
        self.by_id
            .keys()
            .last()
            .copied()
            .ok_or_else(|| CheckpointError::EmptyNamespace(self.root.clone()))
    }

    /// Path of the maximum existing ID
    pub fn last_path(&self) -> Result<PathBuf> {
        self.path_by_id(self.last_id()?)
    }

    /// Next unused ID: max existing + 1, or 1 for an empty namespace
    pub fn next_id(&self) -> u64 {
        self.by_id.keys().last().map_or(1, |max| max + 1)
    }

    /// Create a directory for an explicit ID
    ///
    /// When `base_id` is given, exactly one checkpoint file is copied in
    /// from the base directory: the file numbered `base_iter`, or the last
    /// one if unspecified. This is a one-shot copy, not a persistent link.
    pub fn create_with_id(
        &mut self,
        id: u64,
        description: &str,
        base_id: Option<u64>,
        base_iter: Option<u64>,
    ) -> Result<PathBuf> {
        if self.by_id.contains_key(&id) {
            return Err(CheckpointError::AlreadyExists(id));
        }

        let dir_name = DirName::new(id)
            .with_description(description)
            .with_base(base_id, base_iter);
        let out_path = self.root.join(dir_name.render());
        fs::create_dir_all(&out_path)?;

        if let Some(base_id) = base_id {
            let base_path = self.path_by_id(base_id)?;
            let base_files = CheckpointFileManager::open(&base_path)?;
            let src = match base_iter {
                Some(iter) => base_files.path_by_id(iter)?,
                None => base_files.last_path()?,
            };
            // the copy keeps the source file name; lookups always yield one
            if let Some(file_name) = src.file_name() {
                fs::copy(&src, out_path.join(file_name))?;
            }
        }

        self.refresh()?;
        Ok(out_path)
    }

    /// Allocate the next ID and create its directory
    pub fn create_next(
        &mut self,
        description: &str,
        base_id: Option<u64>,
        base_iter: Option<u64>,
    ) -> Result<PathBuf> {
        self.create_with_id(self.next_id(), description, base_id, base_iter)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn contains_description(&self, description: &str) -> bool {
        self.names.iter().any(|name| name.contains(description))
    }

    /// Delete the directory tree for an ID
    ///
    /// With `missing_ok`, a non-existent ID is a no-op.
    pub fn delete(&mut self, id: u64, missing_ok: bool) -> Result<()> {
        if !self.contains_id(id) {
            if missing_ok {
                return Ok(());
            }
            return Err(CheckpointError::NotFound(id));
        }
        let path = self.path_by_id(id)?;
        fs::remove_dir_all(path)?;
        self.refresh()
    }

    /// Best-effort deletion of every ID strictly below the cutoff
    ///
    /// Per-ID failures (duplicates, filesystem errors) are logged and
    /// skipped so that cleanup never aborts halfway.
    pub fn delete_until(&mut self, cutoff: u64) -> Result<()> {
        let stale: Vec<u64> = self.by_id.range(..cutoff).map(|(&id, _)| id).collect();
        for id in stale {
            if let Err(err) = self.delete(id, true) {
                warn!(id, %err, "skipping checkpoint during range deletion");
            }
        }
        self.refresh()
    }

    /// Whether a directory holds no payload under the current policy
    pub fn dir_is_empty(&self, path: &Path) -> Result<bool> {
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if self.policy.is_payload(&file_name) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Delete a single directory only if it holds no payload
    pub fn delete_empty(&mut self, id: u64, missing_ok: bool) -> Result<()> {
        if !self.contains_id(id) {
            if missing_ok {
                return Ok(());
            }
            return Err(CheckpointError::NotFound(id));
        }
        let path = self.path_by_id(id)?;
        if self.dir_is_empty(&path)? {
            fs::remove_dir_all(path)?;
            self.refresh()?;
        }
        Ok(())
    }

    /// Delete every empty directory except the one holding the current max ID
    ///
    /// The latest checkpoint is always retained, even when empty. Returns
    /// the affected paths; with `dry_run` nothing is removed.
    pub fn prune_empty(&mut self, dry_run: bool) -> Result<Vec<PathBuf>> {
        let last_id = match self.by_id.keys().last() {
            Some(&id) => id,
            None => return Ok(Vec::new()),
        };

        let mut pruned = Vec::new();
        for name in self.names.clone() {
            if name::parse_id(&name) == Some(last_id) {
                continue;
            }
            let path = self.root.join(&name);
            if self.dir_is_empty(&path)? {
                if !dry_run {
                    fs::remove_dir_all(&path)?;
                }
                pruned.push(path);
            }
        }

        if !dry_run && !pruned.is_empty() {
            self.refresh()?;
        }
        Ok(pruned)
    }

    /// Min/max/missing/duplicate diagnostic; `None` for an empty namespace
    pub fn summary(&self) -> Option<Summary> {
        summarize(&self.by_id)
    }
}
