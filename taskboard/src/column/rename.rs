//! RenameColumn command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Rename a column in place, keeping its position and tasks
#[operation(
    verb = "rename",
    noun = "column",
    description = "Rename a column, keeping its position and tasks"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameColumn {
    /// Current column name
    pub name: String,
    /// Name to give it
    pub new_name: String,
}

impl RenameColumn {
    pub fn new(name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            new_name: new_name.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for RenameColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let new_name = self.new_name.trim();

            if !ctx.board().contains_column(&self.name) {
                return Err(BoardError::ColumnNotFound {
                    name: self.name.clone(),
                });
            }

            // Blank or unchanged input keeps the old name
            if new_name.is_empty() || new_name == self.name {
                return Ok(Outcome::Unchanged(serde_json::json!({
                    "name": self.name,
                    "renamed": false,
                })));
            }

            if ctx.board().contains_column(new_name) {
                return Err(BoardError::duplicate_name(new_name));
            }

            if let Some(column) = ctx.board_mut().column_mut(&self.name) {
                column.name = new_name.to_string();
            }

            Ok(Outcome::Changed(serde_json::json!({
                "name": new_name,
                "previous": self.name,
                "renamed": true,
            })))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    fn setup() -> BoardContext {
        let mut ctx = BoardContext::in_memory();
        AddTask::new("Doing", "keep me")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        ctx
    }

    #[test]
    fn test_rename_column_keeps_position_and_tasks() {
        let mut ctx = setup();

        let result = RenameColumn::new("Doing", "In Progress")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["renamed"], true);
        assert_eq!(
            ctx.board().column_names(),
            vec!["To Do", "In Progress", "Done"]
        );
        assert_eq!(ctx.board().columns()[1].tasks[0].text, "keep me");
    }

    #[test]
    fn test_rename_to_blank_or_same_is_noop() {
        let mut ctx = setup();
        let before = ctx.board().clone();

        let result = RenameColumn::new("Doing", "  ").execute(&mut ctx);
        assert!(!result.is_mutation());
        let result = RenameColumn::new("Doing", "Doing").execute(&mut ctx);
        assert!(!result.is_mutation());

        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_rename_to_existing_name() {
        let mut ctx = setup();

        let result = RenameColumn::new("Doing", "Done").execute(&mut ctx).into_result();
        assert!(matches!(result, Err(BoardError::DuplicateName { .. })));
        assert_eq!(ctx.board().column_names(), vec!["To Do", "Doing", "Done"]);
    }

    #[test]
    fn test_rename_missing_column() {
        let mut ctx = setup();

        let result = RenameColumn::new("Backlog", "Icebox")
            .execute(&mut ctx)
            .into_result();
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
    }
}
