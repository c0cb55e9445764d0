//! Opaque key-value blob storage
//!
//! The board engine only ever asks a store to `get` or `set` one string under
//! one key. What sits behind that (a map in memory, a directory of files) is
//! the store's business.

mod file;
mod memory;

pub use file::{FileBlobStore, StoreLock};
pub use memory::MemoryBlobStore;

use crate::error::Result;

/// A string blob store addressed by key
pub trait BlobStore {
    /// Read the blob under `key`, `None` when nothing was ever stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Short human readable location, used in log lines
    fn describe(&self) -> String;
}
