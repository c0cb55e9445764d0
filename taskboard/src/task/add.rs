//! AddTask command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use crate::types::{Task, TaskColor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Add a new task to the end of a column
#[operation(
    verb = "add",
    noun = "task",
    description = "Append a new task to a column"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// Target column; the first column when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// The task text (required)
    pub text: String,
    /// Color tag
    #[serde(default)]
    pub color: TaskColor,
}

impl AddTask {
    /// Create a new AddTask command targeting `column`
    pub fn new(column: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            text: text.into(),
            color: TaskColor::Default,
        }
    }

    /// Create a new AddTask command for the first column
    pub fn in_first_column(text: impl Into<String>) -> Self {
        Self {
            column: None,
            text: text.into(),
            color: TaskColor::Default,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: TaskColor) -> Self {
        self.color = color;
        self
    }
}

impl Execute<BoardContext, BoardError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let column = match &self.column {
                Some(name) => ctx.board().column(name),
                None => ctx.board().columns().first(),
            }
            .map(|c| c.name.clone())
            .ok_or_else(|| BoardError::ColumnNotFound {
                name: self.column.clone().unwrap_or_else(|| "(first column)".into()),
            })?;

            let text = self.text.trim();
            if text.is_empty() {
                return Err(BoardError::empty_input("task text"));
            }

            let task = Task {
                id: ctx.board().fresh_task_id(),
                text: text.to_string(),
                color: self.color,
            };
            let mut result = serde_json::to_value(&task)?;
            result["column"] = serde_json::json!(column);

            if let Some(target) = ctx.board_mut().column_mut(&column) {
                target.tasks.push(task);
            }

            Ok(Outcome::Changed(result))
        })
    }
}
