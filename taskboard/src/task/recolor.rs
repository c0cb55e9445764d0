//! RecolorTask command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::{TaskColor, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Change a task's color tag
#[operation(verb = "recolor", noun = "task", description = "Change the color tag of a task")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecolorTask {
    pub id: TaskId,
    pub color: TaskColor,
}

impl RecolorTask {
    pub fn new(id: impl Into<TaskId>, color: TaskColor) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }
}

impl Execute<BoardContext, BoardError> for RecolorTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let task = ctx
                .board_mut()
                .task_mut(&self.id)
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;

            if task.color == self.color {
                return Ok(Outcome::Unchanged(serde_json::to_value(&*task)?));
            }

            task.color = self.color;
            Ok(Outcome::Changed(serde_json::to_value(&*task)?))
        })
    }
}
