//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations.
///
/// Every error except [`BoardError::StorageFailure`] and
/// [`BoardError::LockBusy`] is raised before any state is touched.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Column name is blank or already taken
    #[error("column name '{name}' is empty or already in use")]
    DuplicateName { name: String },

    /// Column not found
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    /// Task not found anywhere on the board
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Task exists but not in the column a drag started from
    #[error("task {id} is not in column '{column}'")]
    TaskNotInColumn { id: String, column: String },

    /// Column index outside the board
    #[error("column index {index} out of range for {len} columns")]
    IndexOutOfRange { index: usize, len: usize },

    /// Required text was blank
    #[error("{field} must not be empty")]
    EmptyInput { field: String },

    /// Stored or imported blob is not a well-formed board
    #[error("invalid board format: {message}")]
    InvalidFormat { message: String },

    /// The blob store could not read or write
    #[error("storage failure: {message}")]
    StorageFailure { message: String },

    /// Storage lock is held by another process
    #[error("lock busy - another operation in progress")]
    LockBusy,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse error classification surfaced to presentation adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateName,
    NotFound,
    EmptyInput,
    InvalidFormat,
    StorageFailure,
}

impl BoardError {
    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageFailure {
            message: message.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
            Self::ColumnNotFound { .. }
            | Self::TaskNotFound { .. }
            | Self::TaskNotInColumn { .. }
            | Self::IndexOutOfRange { .. } => ErrorKind::NotFound,
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::InvalidFormat { .. } | Self::Json(_) => ErrorKind::InvalidFormat,
            Self::StorageFailure { .. } | Self::LockBusy => ErrorKind::StorageFailure,
        }
    }

    /// Check if this is any flavour of not-found
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy)
    }
}
