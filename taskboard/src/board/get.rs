//! GetBoard command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get the whole board as the column-name → tasks mapping
#[operation(
    verb = "get",
    noun = "board",
    description = "Retrieve the board as an ordered mapping of column name to tasks"
)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GetBoard {}

impl GetBoard {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            Ok(Outcome::Unchanged(serde_json::to_value(ctx.board())?))
        })
    }
}
