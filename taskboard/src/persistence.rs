//! Board <-> blob persistence
//!
//! The whole board is one JSON object stored under one fixed, versionless
//! key. Saving never rolls anything back; loading never fails.

use crate::error::{BoardError, Result};
use crate::store::BlobStore;
use crate::types::Board;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Key the board blob is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "Task-Board-Standalone";

/// Serialize a board to its compact blob form
pub fn encode(board: &Board) -> Result<String> {
    Ok(serde_json::to_string(board)?)
}

/// Serialize a board for humans (exports)
pub fn encode_pretty(board: &Board) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

/// Parse and validate a blob into a board.
///
/// Either the whole blob is a well-formed board or the result is
/// `InvalidFormat`; nothing partial is ever returned.
pub fn decode(blob: &str) -> Result<Board> {
    serde_json::from_str(blob).map_err(|e| BoardError::invalid_format(e.to_string()))
}

/// Write the board under `key`
pub fn save(store: &mut dyn BlobStore, key: &str, board: &Board) -> Result<()> {
    let blob = encode(board)?;
    store.set(key, &blob)?;
    tracing::debug!(
        key,
        store = %store.describe(),
        bytes = blob.len(),
        columns = board.len(),
        tasks = board.task_count(),
        "saved board"
    );
    Ok(())
}

/// Read the board under `key`, falling back to the default skeleton when the
/// blob is missing, unreadable or malformed.
pub fn load(store: &dyn BlobStore, key: &str) -> Board {
    match try_load(store, key) {
        Ok(Some(board)) => {
            tracing::debug!(
                key,
                columns = board.len(),
                tasks = board.task_count(),
                "loaded board"
            );
            board
        }
        Ok(None) => {
            tracing::info!(key, store = %store.describe(), "no stored board, starting from default columns");
            Board::skeleton()
        }
        Err(error) => {
            tracing::warn!(key, %error, "stored board unusable, starting from default columns");
            Board::skeleton()
        }
    }
}

/// Strict variant of [`load`]: `None` when absent, errors surfaced
pub fn try_load(store: &dyn BlobStore, key: &str) -> Result<Option<Board>> {
    match store.get(key)? {
        Some(blob) => decode(&blob).map(Some),
        None => Ok(None),
    }
}

/// Suggested export file name, e.g. `Tasks-2026-10-19_14-05-09.json`.
///
/// Date and time are both read in `at`'s own zone.
pub fn snapshot_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("Tasks-%Y-%m-%d_%H-%M-%S.json").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBlobStore;
    use crate::types::{Column, Task, TaskColor};
    use chrono::Utc;

    fn sample() -> Board {
        let mut todo = Column::new("To Do");
        todo.tasks
            .push(Task::new("write spec").with_color(TaskColor::Blue));
        Board::from_columns(vec![Column::new("Later"), todo]).unwrap()
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = MemoryBlobStore::new();
        let board = sample();
        save(&mut store, DEFAULT_STORAGE_KEY, &board).unwrap();
        assert_eq!(load(&store, DEFAULT_STORAGE_KEY), board);
    }

    #[test]
    fn test_load_missing_gives_skeleton() {
        let store = MemoryBlobStore::new();
        assert_eq!(load(&store, DEFAULT_STORAGE_KEY), Board::skeleton());
    }

    #[test]
    fn test_load_corrupt_gives_skeleton() {
        let store = MemoryBlobStore::new().with_blob(DEFAULT_STORAGE_KEY, "{not json");
        assert_eq!(load(&store, DEFAULT_STORAGE_KEY), Board::skeleton());

        let store = MemoryBlobStore::new().with_blob(DEFAULT_STORAGE_KEY, "[1, 2]");
        assert_eq!(load(&store, DEFAULT_STORAGE_KEY), Board::skeleton());
    }

    #[test]
    fn test_try_load_surfaces_format_errors() {
        let store = MemoryBlobStore::new().with_blob("k", "\"text\"");
        let err = try_load(&store, "k").unwrap_err();
        assert!(matches!(err, BoardError::InvalidFormat { .. }));
        assert!(try_load(&MemoryBlobStore::new(), "k").unwrap().is_none());
    }

    #[test]
    fn test_decode_accepts_legacy_integer_ids() {
        let board =
            decode(r#"{"To Do": [{"id": 1718000000000, "text": "old", "color": "c-green"}]}"#)
                .unwrap();
        let task = &board.columns()[0].tasks[0];
        assert_eq!(task.id.as_str(), "1718000000000");
        assert_eq!(task.color, TaskColor::Green);
    }

    #[test]
    fn test_save_failure_is_storage_error() {
        let mut store = MemoryBlobStore::new().with_quota(2);
        let err = save(&mut store, "k", &Board::skeleton()).unwrap_err();
        assert!(matches!(err, BoardError::StorageFailure { .. }));
    }

    #[test]
    fn test_snapshot_file_name() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 9, 4, 5).unwrap();
        assert_eq!(snapshot_file_name(&at), "Tasks-2026-03-07_09-04-05.json");
    }

    #[test]
    fn test_snapshot_file_name_uses_one_zone_across_midnight() {
        let zone = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let at = Utc
            .with_ymd_and_hms(2026, 3, 7, 23, 30, 0)
            .unwrap()
            .with_timezone(&zone);
        assert_eq!(snapshot_file_name(&at), "Tasks-2026-03-08_01-30-00.json");
    }

    #[test]
    fn test_encode_pretty_is_indented() {
        let text = encode_pretty(&Board::skeleton()).unwrap();
        assert!(text.contains("\n  \"To Do\": []"));
    }
}
