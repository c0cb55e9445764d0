//! MoveColumn command

use crate::context::{run, BoardContext, Outcome};
use crate::error::{BoardError, Result};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Move a column to a new position
#[operation(
    verb = "move",
    noun = "column",
    description = "Move a column to a new position (list splice, not swap)"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveColumn {
    /// Current index of the column
    pub from: usize,
    /// Index it should end up at
    pub to: usize,
}

impl MoveColumn {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Extract the column at `from` and reinsert it at `to`.
///
/// Returns `false` for the `from == to` no-op.
pub(crate) fn splice_column(board: &mut Board, from: usize, to: usize) -> Result<bool> {
    if from == to {
        return Ok(false);
    }

    let len = board.len();
    for index in [from, to] {
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
    }

    let columns = board.columns_mut();
    let column = columns.remove(from);
    columns.insert(to, column);
    Ok(true)
}

impl Execute<BoardContext, BoardError> for MoveColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let moved = splice_column(ctx.board_mut(), self.from, self.to)?;
            let value = serde_json::json!({
                "moved": moved,
                "columns": ctx.board().column_names(),
            });

            Ok(if moved {
                Outcome::Changed(value)
            } else {
                Outcome::Unchanged(value)
            })
        })
    }
}
