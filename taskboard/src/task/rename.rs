//! RenameTask command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Change a task's text
#[operation(verb = "rename", noun = "task", description = "Change the text of a task")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameTask {
    pub id: TaskId,
    /// New text; blank keeps the current text
    pub text: String,
}

impl RenameTask {
    pub fn new(id: impl Into<TaskId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for RenameTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let text = self.text.trim();
            let task = ctx
                .board_mut()
                .task_mut(&self.id)
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;

            if text.is_empty() || text == task.text {
                return Ok(Outcome::Unchanged(serde_json::to_value(&*task)?));
            }

            task.text = text.to_string();
            Ok(Outcome::Changed(serde_json::to_value(&*task)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    fn setup() -> (BoardContext, TaskId) {
        let mut ctx = BoardContext::in_memory();
        let result = AddTask::new("To Do", "draft")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        let id = TaskId::from(result["id"].as_str().unwrap());
        (ctx, id)
    }

    #[test]
    fn test_rename_task() {
        let (mut ctx, id) = setup();

        let result = RenameTask::new(&id, "final")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["text"], "final");
        assert_eq!(ctx.board().task(&id).unwrap().text, "final");
    }

    #[test]
    fn test_rename_task_blank_keeps_text() {
        let (mut ctx, id) = setup();

        let result = RenameTask::new(&id, "   ").execute(&mut ctx);
        assert!(!result.is_mutation());
        assert_eq!(result.into_result().unwrap()["text"], "draft");
        assert_eq!(ctx.board().task(&id).unwrap().text, "draft");
    }

    #[test]
    fn test_rename_task_not_found() {
        let (mut ctx, _) = setup();

        let result = RenameTask::new("nope", "x").execute(&mut ctx).into_result();
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }
}
