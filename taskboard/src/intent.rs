//! Intents: one user action, delivered to [`dispatch`]
//!
//! An intent is any board command tagged with its `verb noun` op string, so
//! a presentation layer can hand over plain JSON such as
//! `{"op": "move task", "id": "01J..", "from": "To Do", "to": "Doing"}`.

use crate::board::{ExportBoard, GetBoard, ImportBoard, ResetBoard};
use crate::column::{AddColumn, DeleteColumn, ListColumns, MoveColumn, RenameColumn};
use crate::context::BoardContext;
use crate::drag::{CancelDrag, DropOnColumn, StartColumnDrag, StartTaskDrag};
use crate::error::{BoardError, Result};
use crate::task::{AddTask, DeleteTask, GetTask, MoveTask, RecolorTask, RenameTask};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Operation, OperationProcessor};

/// Every action the board accepts
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "op")]
pub enum Intent {
    #[serde(rename = "add column")]
    AddColumn(AddColumn),
    #[serde(rename = "rename column")]
    RenameColumn(RenameColumn),
    #[serde(rename = "delete column")]
    DeleteColumn(DeleteColumn),
    #[serde(rename = "move column")]
    MoveColumn(MoveColumn),
    #[serde(rename = "list columns")]
    ListColumns(ListColumns),

    #[serde(rename = "add task")]
    AddTask(AddTask),
    #[serde(rename = "rename task")]
    RenameTask(RenameTask),
    #[serde(rename = "recolor task")]
    RecolorTask(RecolorTask),
    #[serde(rename = "delete task")]
    DeleteTask(DeleteTask),
    #[serde(rename = "move task")]
    MoveTask(MoveTask),
    #[serde(rename = "get task")]
    GetTask(GetTask),

    #[serde(rename = "get board")]
    GetBoard(GetBoard),
    #[serde(rename = "reset board")]
    ResetBoard(ResetBoard),
    #[serde(rename = "import board")]
    ImportBoard(ImportBoard),
    #[serde(rename = "export board")]
    ExportBoard(ExportBoard),

    #[serde(rename = "start task drag")]
    StartTaskDrag(StartTaskDrag),
    #[serde(rename = "start column drag")]
    StartColumnDrag(StartColumnDrag),
    #[serde(rename = "drop on column")]
    DropOnColumn(DropOnColumn),
    #[serde(rename = "cancel drag")]
    CancelDrag(CancelDrag),
}

impl Intent {
    /// The wrapped command as an [`Operation`]
    pub fn operation(&self) -> &dyn Operation {
        match self {
            Self::AddColumn(op) => op,
            Self::RenameColumn(op) => op,
            Self::DeleteColumn(op) => op,
            Self::MoveColumn(op) => op,
            Self::ListColumns(op) => op,
            Self::AddTask(op) => op,
            Self::RenameTask(op) => op,
            Self::RecolorTask(op) => op,
            Self::DeleteTask(op) => op,
            Self::MoveTask(op) => op,
            Self::GetTask(op) => op,
            Self::GetBoard(op) => op,
            Self::ResetBoard(op) => op,
            Self::ImportBoard(op) => op,
            Self::ExportBoard(op) => op,
            Self::StartTaskDrag(op) => op,
            Self::StartColumnDrag(op) => op,
            Self::DropOnColumn(op) => op,
            Self::CancelDrag(op) => op,
        }
    }

    /// Canonical op string, e.g. `"move task"`
    pub fn op_string(&self) -> String {
        self.operation().op_string()
    }

    /// Parse one intent
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BoardError::invalid_format(e.to_string()))
    }
}

/// Parse a single intent object or an array of them
pub fn parse_batch(json: &str) -> Result<Vec<Intent>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Batch {
        Many(Vec<Intent>),
        One(Intent),
    }

    let batch: Batch =
        serde_json::from_str(json).map_err(|e| BoardError::invalid_format(e.to_string()))?;
    Ok(match batch {
        Batch::Many(intents) => intents,
        Batch::One(intent) => vec![intent],
    })
}

/// Run one intent to completion through `processor`
pub fn dispatch<P>(processor: &P, ctx: &mut BoardContext, intent: &Intent) -> Result<Value>
where
    P: OperationProcessor<BoardContext, BoardError>,
{
    tracing::trace!(op = %intent.op_string(), "dispatching intent");
    match intent {
        Intent::AddColumn(op) => processor.process(op, ctx),
        Intent::RenameColumn(op) => processor.process(op, ctx),
        Intent::DeleteColumn(op) => processor.process(op, ctx),
        Intent::MoveColumn(op) => processor.process(op, ctx),
        Intent::ListColumns(op) => processor.process(op, ctx),
        Intent::AddTask(op) => processor.process(op, ctx),
        Intent::RenameTask(op) => processor.process(op, ctx),
        Intent::RecolorTask(op) => processor.process(op, ctx),
        Intent::DeleteTask(op) => processor.process(op, ctx),
        Intent::MoveTask(op) => processor.process(op, ctx),
        Intent::GetTask(op) => processor.process(op, ctx),
        Intent::GetBoard(op) => processor.process(op, ctx),
        Intent::ResetBoard(op) => processor.process(op, ctx),
        Intent::ImportBoard(op) => processor.process(op, ctx),
        Intent::ExportBoard(op) => processor.process(op, ctx),
        Intent::StartTaskDrag(op) => processor.process(op, ctx),
        Intent::StartColumnDrag(op) => processor.process(op, ctx),
        Intent::DropOnColumn(op) => processor.process(op, ctx),
        Intent::CancelDrag(op) => processor.process(op, ctx),
    }
}

/// Run intents in order, stopping at the first failure.
///
/// Returns the values of every intent that ran; intents already applied
/// before a failure stay applied.
pub fn dispatch_all<P>(
    processor: &P,
    ctx: &mut BoardContext,
    intents: &[Intent],
) -> std::result::Result<Vec<Value>, (usize, BoardError)>
where
    P: OperationProcessor<BoardContext, BoardError>,
{
    let mut values = Vec::with_capacity(intents.len());
    for (index, intent) in intents.iter().enumerate() {
        match dispatch(processor, ctx, intent) {
            Ok(value) => values.push(value),
            Err(error) => return Err((index, error)),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardOperationProcessor;

    #[test]
    fn test_parse_tagged_intents() {
        let intent = Intent::parse(r#"{"op": "add column", "name": "QA"}"#).unwrap();
        assert_eq!(intent.op_string(), "add column");

        let intent = Intent::parse(r#"{"op": "list columns"}"#).unwrap();
        assert!(matches!(intent, Intent::ListColumns(_)));

        let intent = Intent::parse(r#"{"op": "move task", "id": 42, "from": "A", "to": "B"}"#)
            .unwrap();
        match intent {
            Intent::MoveTask(op) => assert_eq!(op.id.as_str(), "42"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_op() {
        let err = Intent::parse(r#"{"op": "archive task", "id": "1"}"#).unwrap_err();
        assert!(matches!(err, BoardError::InvalidFormat { .. }));
    }

    #[test]
    fn test_op_strings_match_operations() {
        let json = serde_json::to_value(Intent::DropOnColumn(DropOnColumn::new("Done"))).unwrap();
        assert_eq!(json["op"], "drop on column");
        assert_eq!(
            Intent::DropOnColumn(DropOnColumn::new("Done")).op_string(),
            "drop on column"
        );
        assert_eq!(
            Intent::StartTaskDrag(StartTaskDrag::new("1")).op_string(),
            "start task drag"
        );
    }

    #[test]
    fn test_parse_batch_single_or_many() {
        assert_eq!(parse_batch(r#"{"op": "get board"}"#).unwrap().len(), 1);
        let many = parse_batch(r#"[{"op": "get board"}, {"op": "cancel drag"}]"#).unwrap();
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn test_dispatch_all_stops_at_first_failure() {
        let mut ctx = BoardContext::in_memory();
        let processor = BoardOperationProcessor::new();
        let intents = parse_batch(
            r#"[
                {"op": "add column", "name": "QA"},
                {"op": "add column", "name": "QA"},
                {"op": "add column", "name": "Never"}
            ]"#,
        )
        .unwrap();

        let (index, error) = dispatch_all(&processor, &mut ctx, &intents).unwrap_err();
        assert_eq!(index, 1);
        assert!(matches!(error, BoardError::DuplicateName { .. }));
        assert!(ctx.board().contains_column("QA"));
        assert!(!ctx.board().contains_column("Never"));
    }
}
