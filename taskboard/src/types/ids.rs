//! Identifier newtypes

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identity of a task for its whole lifetime.
///
/// Freshly created tasks get a ULID. Blobs written by older boards carry
/// integer ids (creation timestamps); those are accepted and kept as their
/// decimal string so lookups by the printed id keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a new unique id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    /// Wrap an existing id string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&TaskId> for TaskId {
    fn from(id: &TaskId) -> Self {
        id.clone()
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TaskIdVisitor)
    }
}

struct TaskIdVisitor;

impl<'de> Visitor<'de> for TaskIdVisitor {
    type Value = TaskId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a task id string or integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TaskId, E> {
        if v.is_empty() {
            return Err(E::custom("task id must not be empty"));
        }
        Ok(TaskId(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<TaskId, E> {
        if v.is_empty() {
            return Err(E::custom("task id must not be empty"));
        }
        Ok(TaskId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TaskId, E> {
        Ok(TaskId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TaskId, E> {
        Ok(TaskId(v.to_string()))
    }
}
