//! Single-user kanban task board engine
//!
//! This crate provides the board state model, the drag-and-drop reorder
//! engine and the persistence adapter for a task board: an ordered set of
//! uniquely named columns, each holding an ordered list of colored text tasks.
//!
//! ## Overview
//!
//! - **One owned board** - [`BoardContext`] holds the board; every command
//!   takes it by `&mut`, so exactly one intent runs at a time
//! - **Validate, then apply** - a rejected command leaves the board untouched
//! - **Saved after every change** - the whole board is one JSON blob in a
//!   [`BlobStore`]; a failed save is reported but never rolls back
//! - **Fail-open load** - a missing or corrupt blob starts the default
//!   `To Do` / `Doing` / `Done` board
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{column::MoveColumn, task::AddTask, BoardContext, Execute, TaskColor};
//!
//! let mut ctx = BoardContext::in_memory();
//!
//! let result = AddTask::new("To Do", "write spec")
//!     .with_color(TaskColor::Blue)
//!     .execute(&mut ctx)
//!     .into_result()?;
//! println!("Created task: {}", result["id"]);
//!
//! MoveColumn::new(0, 2).execute(&mut ctx).into_result()?;
//! assert_eq!(ctx.board().column_names(), vec!["Doing", "Done", "To Do"]);
//! # Ok::<(), taskboard::BoardError>(())
//! ```
//!
//! ## Intents
//!
//! Presentation layers that speak JSON go through [`dispatch`]:
//!
//! ```rust
//! use taskboard::{dispatch, BoardContext, BoardOperationProcessor, Intent};
//!
//! let mut ctx = BoardContext::in_memory();
//! let processor = BoardOperationProcessor::new().with_actor("docs");
//! let intent = Intent::parse(r#"{"op": "add column", "name": "QA"}"#)?;
//! dispatch(&processor, &mut ctx, &intent)?;
//! # Ok::<(), taskboard::BoardError>(())
//! ```
//!
//! ## Stored Blob
//!
//! ```text
//! {"To Do": [{"id": "01J..", "text": "write spec", "color": "c-blue"}], "Doing": [], "Done": []}
//! ```
//!
//! Key order is display order. There is no version field.

mod context;
mod error;
pub mod intent;
pub mod persistence;
mod processor;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod drag;
pub mod task;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use context::BoardContext;
pub use drag::DragSession;
pub use error::{BoardError, ErrorKind, Result};
pub use intent::{dispatch, dispatch_all, parse_batch, Intent};
pub use persistence::DEFAULT_STORAGE_KEY;
pub use processor::BoardOperationProcessor;
pub use store::{BlobStore, FileBlobStore, MemoryBlobStore};

// Re-export commonly used types
pub use types::{Board, Column, Task, TaskColor, TaskId, DEFAULT_COLUMNS};
