//! AddColumn command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::Column;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Append a new empty column
#[operation(
    verb = "add",
    noun = "column",
    description = "Append a new empty column to the board"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column name (unique, case-sensitive)
    pub name: String,
}

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Execute<BoardContext, BoardError> for AddColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let name = self.name.trim();

            // A blank name is reported the same way as a taken one
            if name.is_empty() || ctx.board().contains_column(name) {
                return Err(BoardError::duplicate_name(name));
            }

            ctx.board_mut().columns_mut().push(Column::new(name));
            let index = ctx.board().len() - 1;

            Ok(Outcome::Changed(serde_json::json!({
                "name": name,
                "index": index,
            })))
        })
    }
}
