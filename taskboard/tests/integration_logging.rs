//! Integration tests for activity logging

use taskboard::{
    column::{AddColumn, ListColumns},
    task::{AddTask, GetTask, RenameTask},
    BoardContext, BoardOperationProcessor, MemoryBlobStore, OperationProcessor,
};

#[test_log::test]
fn test_activity_logging_end_to_end() {
    let mut ctx = BoardContext::open(MemoryBlobStore::new());
    let processor = BoardOperationProcessor::new().with_actor("test-user[session123]");

    // Add a column (logged)
    processor.process(&AddColumn::new("QA"), &mut ctx).unwrap();

    // Add a task (logged)
    let result = processor
        .process(&AddTask::new("QA", "First task"), &mut ctx)
        .unwrap();
    let task_id = result["id"].as_str().unwrap().to_string();

    // Rename the task (logged)
    processor
        .process(&RenameTask::new(task_id.as_str(), "Updated task"), &mut ctx)
        .unwrap();

    // Reads are not logged
    processor
        .process(&GetTask::new(task_id.as_str()), &mut ctx)
        .unwrap();
    processor.process(&ListColumns::new(), &mut ctx).unwrap();

    let entries = ctx.recent_activity(10);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].op, "rename task"); // Newest first
    assert_eq!(entries[1].op, "add task");
    assert_eq!(entries[2].op, "add column"); // Oldest last

    for entry in &entries {
        assert_eq!(entry.actor.as_deref(), Some("test-user[session123]"));
    }

    assert_eq!(entries[0].input["text"], "Updated task");
    assert_eq!(entries[1].output["column"], "QA");
}

#[test_log::test]
fn test_noop_gestures_are_not_logged() {
    let mut ctx = BoardContext::in_memory();
    let processor = BoardOperationProcessor::new();

    processor
        .process(&taskboard::column::RenameColumn::new("Done", ""), &mut ctx)
        .unwrap();
    processor
        .process(&taskboard::column::MoveColumn::new(1, 1), &mut ctx)
        .unwrap();

    assert!(ctx.recent_activity(10).is_empty());
}

#[test_log::test]
fn test_rejected_operation_logged_as_failure() {
    let mut ctx = BoardContext::in_memory();
    let processor = BoardOperationProcessor::new().with_actor("cli");

    let result = processor.process(&AddTask::new("Nowhere", "x"), &mut ctx);
    assert!(result.is_err());

    let entries = ctx.recent_activity(1);
    assert!(entries[0].is_failure());
    assert_eq!(entries[0].op, "add task");
    assert_eq!(entries[0].output["error"], "column not found: Nowhere");
}
