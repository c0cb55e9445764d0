//! Error handling for the taskboard CLI
//!
//! Errors keep their source chain and carry the exit code the process
//! should end with.

use std::error::Error;
use std::fmt;

use taskboard::BoardError;
use taskboard_config::ConfigError;

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Wrap `source` under a leading message
    pub fn with_source(
        message: impl Into<String>,
        exit_code: i32,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: Some(source.into()),
        }
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();
        let mut previous = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            let text = err.to_string();
            // A wrapped error whose text was already printed adds nothing.
            if text != previous {
                result.push_str(&format!("\n  Caused by: {text}"));
            }
            previous = text;
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<BoardError> for CliError {
    fn from(error: BoardError) -> Self {
        let message = match &error {
            BoardError::LockBusy => {
                "the board is in use by another taskboard process, try again".to_string()
            }
            other => other.to_string(),
        };
        Self::with_source(message, EXIT_ERROR, error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self::with_source("invalid configuration", EXIT_ERROR, error)
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::with_source("I/O error", EXIT_ERROR, error)
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result(result: CliResult<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(exit_code = e.exit_code, "command failed");
            eprintln!("Error: {}", e.full_chain());
            if e.exit_code == EXIT_SUCCESS {
                EXIT_ERROR
            } else {
                e.exit_code
            }
        }
    }
}
