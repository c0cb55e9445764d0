//! GetTask command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get a task by ID together with where it lives
#[operation(
    verb = "get",
    noun = "task",
    description = "Retrieve a task by ID with its column and position"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetTask {
    /// The task ID to retrieve
    pub id: TaskId,
}

impl GetTask {
    /// Create a new GetTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for GetTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let board = ctx.board();
            let location = board
                .locate_task(&self.id)
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;
            let column = &board.columns()[location.column];

            let mut result = serde_json::to_value(&column.tasks[location.index])?;
            result["column"] = serde_json::json!(column.name);
            result["index"] = serde_json::json!(location.index);
            Ok(Outcome::Unchanged(result))
        })
    }
}
