//! Execution result types for operations

use crate::LogEntry;

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: operations that mutated the board and should be audited
/// - Unlogged: reads and no-op gestures with no side effects
/// - Failed: rejected operations (optionally logged)
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// Operation succeeded and should be logged
    Logged { value: T, log_entry: LogEntry },
    /// Operation succeeded without touching state
    Unlogged { value: T },
    /// Operation failed; state is unchanged
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } | Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Borrow the log entry, if any
    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Self::Logged { log_entry, .. } => Some(log_entry),
            Self::Unlogged { .. } => None,
            Self::Failed { log_entry, .. } => log_entry.as_ref(),
        }
    }

    /// True when the operation changed state
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }

    /// True when the operation was rejected
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
