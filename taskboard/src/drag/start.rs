//! Drag start commands

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Pick up a task card
#[operation(
    verb = "start",
    noun = "task drag",
    description = "Begin dragging a task, remembering the column it came from"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StartTaskDrag {
    pub id: TaskId,
}

impl StartTaskDrag {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for StartTaskDrag {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            // A new gesture ends the old one even when it cannot start
            let Some(source) = ctx.board().task_column(&self.id).map(str::to_string) else {
                if let Some(previous) = ctx.drag_mut().cancel() {
                    tracing::debug!(?previous, "unterminated drag cancelled");
                }
                return Err(BoardError::TaskNotFound {
                    id: self.id.to_string(),
                });
            };

            let replaced = ctx.drag_mut().start_task(self.id.clone(), source);
            if let Some(previous) = &replaced {
                tracing::debug!(?previous, "unterminated drag replaced");
            }

            Ok(Outcome::Unchanged(serde_json::json!({
                "session": ctx.drag(),
                "replaced": replaced,
            })))
        })
    }
}

/// Pick up a column header
#[operation(
    verb = "start",
    noun = "column drag",
    description = "Begin dragging the column at an index"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StartColumnDrag {
    pub index: usize,
}

impl StartColumnDrag {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Execute<BoardContext, BoardError> for StartColumnDrag {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let Some(name) = ctx.board().columns().get(self.index).map(|c| c.name.clone())
            else {
                if let Some(previous) = ctx.drag_mut().cancel() {
                    tracing::debug!(?previous, "unterminated drag cancelled");
                }
                return Err(BoardError::IndexOutOfRange {
                    index: self.index,
                    len: ctx.board().len(),
                });
            };

            let replaced = ctx.drag_mut().start_column(self.index, name);
            if let Some(previous) = &replaced {
                tracing::debug!(?previous, "unterminated drag replaced");
            }

            Ok(Outcome::Unchanged(serde_json::json!({
                "session": ctx.drag(),
                "replaced": replaced,
            })))
        })
    }
}
