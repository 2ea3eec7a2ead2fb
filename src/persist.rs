// src/persist.rs

//! Completed-tasks snapshot.
//!
//! The completed list is stored as one JSON array under a fixed key. It is
//! read once when the store opens and rewritten in full after every change
//! to the completed list; there is no incremental format.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::config::StorageSection;
use crate::errors::Result;
use crate::fs::{FileSystem, MemoryFileSystem, RealFileSystem};
use crate::task::CompletedTask;
use crate::types::StorageMode;

/// Storage key of the completed-tasks snapshot.
pub const SNAPSHOT_KEY: &str = "completedTasks";

/// Serialize the completed list into the snapshot format.
pub fn to_snapshot_json(completed: &[CompletedTask]) -> Result<String> {
    Ok(serde_json::to_string_pretty(completed)?)
}

/// Parse a snapshot produced by [`to_snapshot_json`].
///
/// Blank input is an empty list.
pub fn from_snapshot_json(text: &str) -> Result<Vec<CompletedTask>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(text)?)
}

/// Reads and writes the snapshot through a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl SnapshotStore {
    /// Snapshot stored as `<dir>/completedTasks.json` on `fs`.
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(format!("{SNAPSHOT_KEY}.json"));
        Self { fs, path }
    }

    /// Snapshot kept in process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryFileSystem::new()), ".")
    }

    pub fn from_config(storage: &StorageSection) -> Self {
        match storage.mode {
            StorageMode::File => Self::new(Arc::new(RealFileSystem), &storage.dir),
            StorageMode::Memory => Self::in_memory(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted completed list. A missing snapshot is empty.
    pub fn load(&self) -> Result<Vec<CompletedTask>> {
        if !self.fs.exists(&self.path) {
            debug!(path = ?self.path, "no completed-tasks snapshot yet");
            return Ok(Vec::new());
        }
        let text = self.fs.read_to_string(&self.path)?;
        let completed = from_snapshot_json(&text)?;
        debug!(path = ?self.path, count = completed.len(), "loaded completed-tasks snapshot");
        Ok(completed)
    }

    /// Overwrite the snapshot with `completed`.
    pub fn save(&self, completed: &[CompletedTask]) -> Result<()> {
        let text = to_snapshot_json(completed)?;
        self.fs.write(&self.path, text.as_bytes())?;
        debug!(path = ?self.path, count = completed.len(), "wrote completed-tasks snapshot");
        Ok(())
    }
}
