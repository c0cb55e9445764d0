//! Core types for the board engine

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column, TaskLocation, DEFAULT_COLUMNS};
pub use ids::TaskId;
pub use task::{Task, TaskColor, UnknownColor};
