//! DeleteColumn command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a column together with all of its tasks
#[operation(
    verb = "delete",
    noun = "column",
    description = "Delete a column and every task in it"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column name to delete
    pub name: String,
}

impl DeleteColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Execute<BoardContext, BoardError> for DeleteColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let index = ctx
                .board()
                .column_index(&self.name)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    name: self.name.clone(),
                })?;

            let column = ctx.board_mut().columns_mut().remove(index);

            Ok(Outcome::Changed(serde_json::json!({
                "deleted": true,
                "name": column.name,
                "tasks_deleted": column.tasks.len(),
            })))
        })
    }
}
