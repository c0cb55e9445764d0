//! Drop and cancel commands

use super::session::{DropAction, DropTarget};
use crate::column::splice_column;
use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::task::transfer_task;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Release whatever is being dragged over a column
#[operation(
    verb = "drop",
    noun = "on column",
    description = "Release the dragged task or column over a column"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DropOnColumn {
    /// Name of the column under the pointer
    pub column: String,
}

impl DropOnColumn {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for DropOnColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            // Released outside any known column: same as cancelling
            let Some(index) = ctx.board().column_index(&self.column) else {
                let cancelled = ctx.drag_mut().cancel();
                return Ok(Outcome::Unchanged(serde_json::json!({
                    "action": "none",
                    "cancelled": cancelled,
                })));
            };

            let target = DropTarget::new(index, self.column.clone());
            match ctx.drag_mut().resolve_drop(&target) {
                None => Ok(Outcome::Unchanged(serde_json::json!({ "action": "none" }))),
                Some(DropAction::MoveTask { id, from, to }) => {
                    let moved = transfer_task(ctx.board_mut(), &id, &from, &to)?;
                    let value = serde_json::json!({
                        "action": "move task",
                        "moved": moved.is_some(),
                        "id": id,
                        "from": from,
                        "to": to,
                    });
                    Ok(if moved.is_some() {
                        Outcome::Changed(value)
                    } else {
                        Outcome::Unchanged(value)
                    })
                }
                Some(DropAction::MoveColumn { name, to }) => {
                    // Columns may have shifted since the drag began
                    let from = ctx
                        .board()
                        .column_index(&name)
                        .ok_or_else(|| BoardError::ColumnNotFound { name: name.clone() })?;
                    let moved = splice_column(ctx.board_mut(), from, to)?;
                    let value = serde_json::json!({
                        "action": "move column",
                        "moved": moved,
                        "column": name,
                        "from": from,
                        "to": to,
                        "columns": ctx.board().column_names(),
                    });
                    Ok(if moved {
                        Outcome::Changed(value)
                    } else {
                        Outcome::Unchanged(value)
                    })
                }
            }
        })
    }
}

/// Abandon the current drag without touching the board
#[operation(
    verb = "cancel",
    noun = "drag",
    description = "Abandon the drag in progress"
)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CancelDrag {}

impl CancelDrag {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for CancelDrag {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let cancelled = ctx.drag_mut().cancel();
            Ok(Outcome::Unchanged(serde_json::json!({
                "cancelled": cancelled,
            })))
        })
    }
}
