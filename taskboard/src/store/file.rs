//! Directory-backed blob store

use super::BlobStore;
use crate::error::{BoardError, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Blob store keeping one `<key>.json` file per key in a directory.
///
/// Writes go through a temp file and a rename so a crash never leaves a
/// half-written blob behind.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    /// Directory holding the blob files
    root: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Try to acquire an exclusive lock on the store (non-blocking)
    pub fn lock(&self) -> Result<StoreLock> {
        fs::create_dir_all(&self.root).map_err(|e| io_failure(&self.root, e))?;

        let lock_path = self.lock_path();
        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| io_failure(&lock_path, e))?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StoreLock { file }),
            Err(_) => Err(BoardError::LockBusy),
        }
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| io_failure(&path, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        atomic_write(&path, value.as_bytes()).map_err(|e| io_failure(&path, e))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// RAII lock guard - releases on drop
#[derive(Debug)]
pub struct StoreLock {
    file: fs::File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Keys become file names, so they must stay inside the store directory
fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(BoardError::storage("storage key must not be empty"));
    }
    if key.contains(['/', '\\']) || key == "." || key == ".." {
        return Err(BoardError::storage(format!(
            "storage key '{}' must not contain path separators",
            key
        )));
    }
    Ok(())
}

fn io_failure(path: &Path, error: std::io::Error) -> BoardError {
    BoardError::storage(format!("{}: {}", path.display(), error))
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path)
}
