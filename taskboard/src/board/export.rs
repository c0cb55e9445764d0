//! ExportBoard command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::persistence;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Produce a pretty-printed snapshot of the board plus a suggested file name
#[operation(
    verb = "export",
    noun = "board",
    description = "Snapshot the board as pretty-printed JSON"
)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportBoard {}

impl ExportBoard {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for ExportBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let content = persistence::encode_pretty(ctx.board())?;
            let file_name = persistence::snapshot_file_name(&chrono::Local::now());

            Ok(Outcome::Unchanged(serde_json::json!({
                "file_name": file_name,
                "content": content,
            })))
        })
    }
}
