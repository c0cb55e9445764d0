//! In-memory blob store

use super::BlobStore;
use crate::error::{BoardError, Result};
use std::collections::HashMap;

/// Blob store backed by a map, with an optional byte quota per blob.
///
/// The quota models browser-style storage exhaustion: a `set` whose value is
/// larger than the quota fails and leaves the previous blob in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit every blob to `bytes`
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Seed a blob directly, bypassing the quota
    pub fn with_blob(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.blobs.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(BoardError::storage(format!(
                    "quota exceeded: {} bytes > {} bytes for key '{}'",
                    value.len(),
                    quota,
                    key
                )));
            }
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("memory ({} blobs)", self.blobs.len())
    }
}
