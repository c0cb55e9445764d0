//! MoveTask command

use crate::context::{run, BoardContext, Outcome};
use crate::error::{BoardError, Result};
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Move a task from one column to the end of another
#[operation(
    verb = "move",
    noun = "task",
    description = "Move a task to the end of another column"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Column the task is expected to be in
    pub from: String,
    /// Column to append it to
    pub to: String,
}

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Detach the task from `from` and append it to `to` in one step.
///
/// Returns the task's new index, or `None` for the same-column no-op.
pub(crate) fn transfer_task(
    board: &mut Board,
    id: &TaskId,
    from: &str,
    to: &str,
) -> Result<Option<usize>> {
    if from == to {
        return Ok(None);
    }

    let dest = board
        .column_index(to)
        .ok_or_else(|| BoardError::ColumnNotFound { name: to.into() })?;
    let source = board
        .column_index(from)
        .ok_or_else(|| BoardError::ColumnNotFound { name: from.into() })?;
    let position = board.columns()[source]
        .position_of(id)
        .ok_or_else(|| BoardError::TaskNotInColumn {
            id: id.to_string(),
            column: from.into(),
        })?;

    let columns = board.columns_mut();
    let task = columns[source].tasks.remove(position);
    columns[dest].tasks.push(task);
    Ok(Some(columns[dest].tasks.len() - 1))
}

impl Execute<BoardContext, BoardError> for MoveTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let moved = transfer_task(ctx.board_mut(), &self.id, &self.from, &self.to)?;
            Ok(match moved {
                Some(index) => Outcome::Changed(serde_json::json!({
                    "moved": true,
                    "id": self.id,
                    "from": self.from,
                    "to": self.to,
                    "index": index,
                })),
                None => Outcome::Unchanged(serde_json::json!({
                    "moved": false,
                    "id": self.id,
                })),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    fn setup() -> (BoardContext, TaskId) {
        let mut ctx = BoardContext::in_memory();
        let added = AddTask::new("To Do", "write spec")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        AddTask::new("To Do", "review")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        let id = TaskId::from(added["id"].as_str().unwrap());
        (ctx, id)
    }

    #[test]
    fn test_move_task_appends_to_destination() {
        let (mut ctx, id) = setup();
        AddTask::new("Doing", "already here")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        let result = MoveTask::new(&id, "To Do", "Doing")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["index"], 1);
        assert_eq!(ctx.board().task_column(&id), Some("Doing"));
        assert_eq!(ctx.board().column("To Do").unwrap().tasks.len(), 1);
        assert_eq!(ctx.board().task_count(), 3);
    }

    #[test]
    fn test_move_back_restores_containment_not_position() {
        let (mut ctx, id) = setup();

        MoveTask::new(&id, "To Do", "Doing").execute(&mut ctx).into_result().unwrap();
        MoveTask::new(&id, "Doing", "To Do").execute(&mut ctx).into_result().unwrap();

        let todo = ctx.board().column("To Do").unwrap();
        assert_eq!(todo.tasks[0].text, "review");
        assert_eq!(todo.tasks[1].id, id);
    }

    #[test]
    fn test_move_to_same_column_is_noop() {
        let (mut ctx, id) = setup();
        let before = ctx.board().clone();

        let result = MoveTask::new(&id, "To Do", "To Do").execute(&mut ctx);
        assert!(!result.is_mutation());
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_move_task_stale_source() {
        let (mut ctx, id) = setup();

        let result = MoveTask::new(&id, "Doing", "Done").execute(&mut ctx).into_result();
        assert!(matches!(result, Err(BoardError::TaskNotInColumn { .. })));
        assert_eq!(ctx.board().task_column(&id), Some("To Do"));
    }

    #[test]
    fn test_move_task_missing_destination() {
        let (mut ctx, id) = setup();

        let result = MoveTask::new(&id, "To Do", "Archive")
            .execute(&mut ctx)
            .into_result();
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        assert_eq!(ctx.board().task_column(&id), Some("To Do"));
    }
}
