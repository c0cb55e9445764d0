//! ImportBoard command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::persistence;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Replace the whole board with an imported blob
#[operation(
    verb = "import",
    noun = "board",
    description = "Replace the whole board with an exported JSON snapshot"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportBoard {
    /// The JSON text of a board snapshot
    pub payload: String,
}

impl ImportBoard {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for ImportBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let board = persistence::decode(&self.payload)?;
            let summary = serde_json::json!({
                "columns": board.column_names(),
                "task_count": board.task_count(),
            });

            ctx.replace_board(board);
            Ok(Outcome::Changed(summary))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;
    use crate::types::{Board, TaskColor, TaskId};

    fn setup() -> BoardContext {
        let mut ctx = BoardContext::in_memory();
        AddTask::new("To Do", "existing")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        ctx
    }

    #[test]
    fn test_import_replaces_board() {
        let mut ctx = setup();
        let payload = r#"{
            "Backlog": [{"id": 1, "text": "legacy", "color": "c-red"}],
            "Shipped": [{"text": "no id"}]
        }"#;

        let result = ImportBoard::new(payload)
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["task_count"], 2);
        assert_eq!(ctx.board().column_names(), vec!["Backlog", "Shipped"]);
        let legacy = ctx.board().task(&TaskId::from("1")).unwrap();
        assert_eq!(legacy.color, TaskColor::Red);
        let generated = &ctx.board().column("Shipped").unwrap().tasks[0];
        assert_eq!(generated.color, TaskColor::Default);
        assert!(!generated.id.as_str().is_empty());
    }

    #[test]
    fn test_import_malformed_leaves_board_unchanged() {
        let mut ctx = setup();
        let before: Board = ctx.board().clone();

        for payload in [
            r#"[{"To Do": []}]"#,
            r#"{"To Do": [{"id": 1, "color": "c-red"}]}"#,
            r#"{"To Do": "tasks"}"#,
            "not json at all",
        ] {
            let result = ImportBoard::new(payload).execute(&mut ctx).into_result();
            assert!(
                matches!(result, Err(BoardError::InvalidFormat { .. })),
                "{payload}"
            );
        }

        assert_eq!(ctx.board(), &before);
    }
}
