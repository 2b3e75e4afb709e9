//! File-backed slot implementation.
//!
//! # Responsibility
//! - Persist the task slot as one JSON document in a single file.
//!
//! # Invariants
//! - A missing file is equivalent to an empty slot.
//! - Every write replaces the full file contents.

use super::{StoragePort, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the task slot in one file on disk.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a slot backed by the given file path.
    ///
    /// The file is not touched until the first write; a path that does not
    /// exist yet reads as an empty slot.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoragePort for FileStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, payload: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
