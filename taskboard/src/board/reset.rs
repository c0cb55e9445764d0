//! ResetBoard command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Replace the board with the three default empty columns
#[operation(
    verb = "reset",
    noun = "board",
    description = "Replace the board with empty To Do, Doing and Done columns"
)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResetBoard {}

impl ResetBoard {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for ResetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let tasks_deleted = ctx.board().task_count();
            ctx.replace_board(Board::skeleton());

            Ok(Outcome::Changed(serde_json::json!({
                "columns": ctx.board().column_names(),
                "tasks_deleted": tasks_deleted,
            })))
        })
    }
}
