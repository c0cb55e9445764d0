//! ListColumns command

use crate::context::{run, BoardContext, Outcome};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// List all columns in display order
#[operation(
    verb = "list",
    noun = "columns",
    description = "List all columns in display order"
)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListColumns {}

impl ListColumns {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for ListColumns {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, ctx, |ctx| {
            let columns: Vec<Value> = ctx
                .board()
                .columns()
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    serde_json::json!({
                        "index": index,
                        "name": column.name,
                        "task_count": column.tasks.len(),
                    })
                })
                .collect();

            Ok(Outcome::Unchanged(serde_json::json!({
                "count": columns.len(),
                "columns": columns,
            })))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    #[test]
    fn test_list_columns() {
        let mut ctx = BoardContext::in_memory();
        AddTask::new("Done", "shipped").execute(&mut ctx).into_result().unwrap();

        let result = ListColumns::new().execute(&mut ctx);
        assert!(!result.is_mutation());

        let value = result.into_result().unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["columns"][0]["name"], "To Do");
        assert_eq!(value["columns"][2]["task_count"], 1);
    }
}
