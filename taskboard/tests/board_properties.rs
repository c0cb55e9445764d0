//! End-to-end properties of the board state model and reorder engine

use proptest::prelude::*;
use std::collections::BTreeSet;
use taskboard::{
    board::{ImportBoard, ResetBoard},
    column::{AddColumn, DeleteColumn, MoveColumn, RenameColumn},
    drag::{DropOnColumn, StartColumnDrag, StartTaskDrag},
    persistence,
    task::{AddTask, DeleteTask, MoveTask},
    BlobStore, Board, BoardContext, BoardError, ErrorKind, Execute, MemoryBlobStore, TaskColor,
    TaskId, DEFAULT_STORAGE_KEY,
};

fn add(ctx: &mut BoardContext, column: &str, text: &str) -> TaskId {
    let value = AddTask::new(column, text)
        .execute(ctx)
        .into_result()
        .unwrap();
    TaskId::from(value["id"].as_str().unwrap())
}

#[test]
fn scenario_add_then_move() {
    let mut ctx = BoardContext::in_memory();

    let value = AddTask::new("To Do", "write spec")
        .with_color(TaskColor::Blue)
        .execute(&mut ctx)
        .into_result()
        .unwrap();
    let id = TaskId::from(value["id"].as_str().unwrap());

    let todo = ctx.board().column("To Do").unwrap();
    assert_eq!(todo.tasks.len(), 1);
    assert_eq!(todo.tasks[0].text, "write spec");
    assert_eq!(todo.tasks[0].color, TaskColor::Blue);

    MoveTask::new(&id, "To Do", "Doing")
        .execute(&mut ctx)
        .into_result()
        .unwrap();

    let json = serde_json::to_value(ctx.board()).unwrap();
    assert_eq!(json["To Do"], serde_json::json!([]));
    assert_eq!(json["Doing"][0]["id"], id.as_str());
    assert_eq!(json["Doing"][0]["color"], "c-blue");
    assert_eq!(json["Done"], serde_json::json!([]));
}

#[test]
fn scenario_column_splice() {
    let mut ctx = BoardContext::in_memory();
    ImportBoard::new(r#"{"A": [], "B": [], "C": []}"#)
        .execute(&mut ctx)
        .into_result()
        .unwrap();

    MoveColumn::new(0, 2).execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.board().column_names(), vec!["B", "C", "A"]);

    MoveColumn::new(2, 0).execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.board().column_names(), vec!["A", "B", "C"]);

    MoveColumn::new(2, 0).execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.board().column_names(), vec!["C", "A", "B"]);
}

#[test]
fn move_there_and_back_restores_containment() {
    let mut ctx = BoardContext::in_memory();
    let first = add(&mut ctx, "To Do", "first");
    add(&mut ctx, "To Do", "second");

    MoveTask::new(&first, "To Do", "Done")
        .execute(&mut ctx)
        .into_result()
        .unwrap();
    MoveTask::new(&first, "Done", "To Do")
        .execute(&mut ctx)
        .into_result()
        .unwrap();

    let texts: Vec<_> = ctx
        .board()
        .column("To Do")
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[test]
fn names_are_case_sensitive_and_tasks_may_repeat() {
    let mut ctx = BoardContext::in_memory();

    let err = AddColumn::new("Done").execute(&mut ctx).into_result().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    AddColumn::new("DONE").execute(&mut ctx).into_result().unwrap();

    let a = add(&mut ctx, "To Do", "same text");
    let b = add(&mut ctx, "To Do", "same text");
    assert_ne!(a, b);
}

#[test]
fn malformed_import_is_invalid_format_and_changes_nothing() {
    let mut ctx = BoardContext::in_memory();
    add(&mut ctx, "Doing", "precious");
    let before = ctx.board().clone();
    let stored_before = ctx.store().get(DEFAULT_STORAGE_KEY).unwrap();

    for payload in [r#"[["To Do", []]]"#, r#"{"To Do": [{"id": 1}]}"#] {
        let err = ImportBoard::new(payload)
            .execute(&mut ctx)
            .into_result()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    assert_eq!(ctx.board(), &before);
    assert_eq!(ctx.store().get(DEFAULT_STORAGE_KEY).unwrap(), stored_before);
}

#[test]
fn every_mutation_is_persisted_before_returning() {
    let mut ctx = BoardContext::in_memory();
    let id = add(&mut ctx, "To Do", "persist me");
    RenameColumn::new("To Do", "Backlog")
        .execute(&mut ctx)
        .into_result()
        .unwrap();

    let stored = ctx.store().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let board = persistence::decode(&stored).unwrap();
    assert_eq!(&board, ctx.board());
    assert_eq!(board.task_column(&id), Some("Backlog"));
}

#[test]
fn storage_quota_failure_keeps_mutation_and_warns() {
    let mut ctx = BoardContext::open(MemoryBlobStore::new().with_quota(64));

    let result = AddTask::new("To Do", "a task whose text pushes the blob past the quota")
        .execute(&mut ctx);

    assert!(result.is_mutation());
    assert_eq!(ctx.board().task_count(), 1);
    let warning = ctx.take_storage_warning().unwrap();
    assert_eq!(warning.kind(), ErrorKind::StorageFailure);

    // Nothing durable changed, so a reload goes back to the skeleton
    ctx.reload();
    assert_eq!(ctx.board(), &Board::skeleton());
}

#[test]
fn reset_after_deleting_everything() {
    let mut ctx = BoardContext::in_memory();
    for name in ["To Do", "Doing", "Done"] {
        DeleteColumn::new(name).execute(&mut ctx).into_result().unwrap();
    }
    assert!(ctx.board().is_empty());

    ResetBoard::new().execute(&mut ctx).into_result().unwrap();
    assert_eq!(ctx.board(), &Board::skeleton());
}

#[test]
fn rejected_operations_report_not_found() {
    let mut ctx = BoardContext::in_memory();
    let cases: Vec<BoardError> = vec![
        DeleteColumn::new("Nope").execute(&mut ctx).into_result().unwrap_err(),
        DeleteTask::new("nope").execute(&mut ctx).into_result().unwrap_err(),
        MoveColumn::new(0, 9).execute(&mut ctx).into_result().unwrap_err(),
    ];
    for err in cases {
        assert!(err.is_not_found(), "{err}");
    }
}

// =========================================================================
// Property tests
// =========================================================================

#[derive(Debug, Clone)]
enum Step {
    AddColumn(String),
    DeleteColumn(usize),
    AddTask(usize, String),
    DeleteTask(usize),
    MoveTask(usize, usize),
    MoveColumn(usize, usize),
    StartTaskDrag(usize),
    StartColumnDrag(usize),
    Drop(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[A-E]{1,2}".prop_map(Step::AddColumn),
        (0usize..6).prop_map(Step::DeleteColumn),
        ((0usize..6), "[a-z ]{0,6}").prop_map(|(c, t)| Step::AddTask(c, t)),
        (0usize..12).prop_map(Step::DeleteTask),
        ((0usize..12), (0usize..6)).prop_map(|(t, c)| Step::MoveTask(t, c)),
        ((0usize..6), (0usize..6)).prop_map(|(a, b)| Step::MoveColumn(a, b)),
        (0usize..12).prop_map(Step::StartTaskDrag),
        (0usize..6).prop_map(Step::StartColumnDrag),
        (0usize..7).prop_map(Step::Drop),
    ]
}

fn column_name(ctx: &BoardContext, index: usize) -> String {
    ctx.board()
        .columns()
        .get(index)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("missing-{index}"))
}

fn nth_task(ctx: &BoardContext, index: usize) -> Option<(TaskId, String)> {
    let ids: Vec<&TaskId> = ctx.board().task_ids().collect();
    if ids.is_empty() {
        return None;
    }
    let id = ids[index % ids.len()].clone();
    let column = ctx.board().task_column(&id)?.to_string();
    Some((id, column))
}

proptest! {
    #[test]
    fn ids_are_added_minus_deleted(steps in proptest::collection::vec(step(), 1..40)) {
        let mut ctx = BoardContext::in_memory();
        let mut expected: BTreeSet<TaskId> = BTreeSet::new();
        let mut dragged_column: Option<String> = None;

        for step in steps {
            match step {
                Step::AddColumn(name) => {
                    let _ = AddColumn::new(name).execute(&mut ctx);
                }
                Step::DeleteColumn(index) => {
                    let name = column_name(&ctx, index);
                    if let Some(column) = ctx.board().column(&name) {
                        for task in &column.tasks {
                            expected.remove(&task.id);
                        }
                    }
                    let _ = DeleteColumn::new(name).execute(&mut ctx);
                }
                Step::AddTask(index, text) => {
                    let name = column_name(&ctx, index);
                    if let Ok(value) = AddTask::new(name, text).execute(&mut ctx).into_result() {
                        expected.insert(TaskId::from(value["id"].as_str().unwrap()));
                    }
                }
                Step::DeleteTask(index) => {
                    if let Some((id, _)) = nth_task(&ctx, index) {
                        DeleteTask::new(&id).execute(&mut ctx).into_result().unwrap();
                        expected.remove(&id);
                    }
                }
                Step::MoveTask(index, to) => {
                    if let Some((id, from)) = nth_task(&ctx, index) {
                        let to = column_name(&ctx, to);
                        let _ = MoveTask::new(&id, from, to).execute(&mut ctx);
                    }
                }
                Step::MoveColumn(from, to) => {
                    let _ = MoveColumn::new(from, to).execute(&mut ctx);
                }
                Step::StartTaskDrag(index) => {
                    if let Some((id, _)) = nth_task(&ctx, index) {
                        StartTaskDrag::new(&id).execute(&mut ctx).into_result().unwrap();
                        dragged_column = None;
                    }
                }
                Step::StartColumnDrag(index) => {
                    dragged_column = StartColumnDrag::new(index)
                        .execute(&mut ctx)
                        .into_result()
                        .ok()
                        .map(|_| column_name(&ctx, index));
                }
                Step::Drop(index) => {
                    let target = column_name(&ctx, index);
                    let target_index = ctx.board().column_index(&target);
                    let result = DropOnColumn::new(&target).execute(&mut ctx).into_result();
                    prop_assert!(ctx.drag().is_idle());

                    // A column drop lands the dragged column, not whatever sits at its old index
                    if let (Some(name), Ok(value)) = (dragged_column.take(), result) {
                        if value["action"] == "move column" {
                            prop_assert_eq!(ctx.board().column_index(&name), target_index);
                        }
                    }
                }
            }

            let actual: BTreeSet<TaskId> = ctx.board().task_ids().cloned().collect();
            prop_assert_eq!(actual.len(), ctx.board().task_count());
            prop_assert_eq!(&actual, &expected);
            prop_assert!(ctx.board().validate().is_ok());
        }

        let mut store = MemoryBlobStore::new();
        persistence::save(&mut store, "k", ctx.board()).unwrap();
        prop_assert_eq!(&persistence::load(&store, "k"), ctx.board());
    }
}
