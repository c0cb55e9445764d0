//! # Taskboard Operations
//!
//! Operations are structs where the fields ARE the parameters. Each one knows
//! its canonical `verb noun` pair and runs synchronously against a context,
//! producing an [`ExecutionResult`] that says whether the call mutated state
//! (and should be audited) or was a read.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[operation(verb = "add", noun = "column", description = "Append an empty column")]
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddColumn {
//!     /// The column name
//!     pub name: String,
//! }
//!
//! impl Execute<BoardContext, BoardError> for AddColumn {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // returns ExecutionResult::Logged, Unlogged or Failed
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export proc macros
pub use taskboard_operations_macros::operation;

pub use serde_json::Value;
