//! DeleteTask command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a task from whichever column owns it
#[operation(verb = "delete", noun = "task", description = "Delete a task")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let location =
                ctx.board()
                    .locate_task(&self.id)
                    .ok_or_else(|| BoardError::TaskNotFound {
                        id: self.id.to_string(),
                    })?;

            let column = &mut ctx.board_mut().columns_mut()[location.column];
            let task = column.tasks.remove(location.index);

            Ok(Outcome::Changed(serde_json::json!({
                "deleted": true,
                "id": task.id,
                "column": column.name,
            })))
        })
    }
}
