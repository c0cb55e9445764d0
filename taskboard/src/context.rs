//! BoardContext - the single owned board plus its I/O primitives
//!
//! The context holds the in-memory board, the blob store it is persisted to,
//! the current drag session and a short activity history. Operations do all
//! the validating and mutating; the context only knows how to persist.

use crate::drag::DragSession;
use crate::error::{BoardError, Result};
use crate::persistence::{self, DEFAULT_STORAGE_KEY};
use crate::store::{BlobStore, MemoryBlobStore};
use crate::types::Board;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Instant;
use taskboard_operations::{ExecutionResult, LogEntry, Operation};

/// Activity entries kept in memory, newest first
const ACTIVITY_CAPACITY: usize = 256;

/// Context passed to every operation
pub struct BoardContext {
    board: Board,
    store: Box<dyn BlobStore>,
    storage_key: String,
    drag: DragSession,
    storage_warning: Option<BoardError>,
    activity: VecDeque<LogEntry>,
}

impl std::fmt::Debug for BoardContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardContext")
            .field("store", &self.store.describe())
            .field("storage_key", &self.storage_key)
            .field("columns", &self.board.len())
            .field("tasks", &self.board.task_count())
            .field("drag", &self.drag)
            .finish()
    }
}

impl BoardContext {
    /// Load the board stored under the default key (fail-open)
    pub fn open(store: impl BlobStore + 'static) -> Self {
        Self::open_with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Load the board stored under `key` (fail-open)
    pub fn open_with_key(store: impl BlobStore + 'static, key: impl Into<String>) -> Self {
        let storage_key = key.into();
        let board = persistence::load(&store, &storage_key);
        Self {
            board,
            store: Box::new(store),
            storage_key,
            drag: DragSession::Idle,
            storage_warning: None,
            activity: VecDeque::new(),
        }
    }

    /// Fresh context over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::open(MemoryBlobStore::new())
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.drag = DragSession::Idle;
    }

    pub fn store(&self) -> &dyn BlobStore {
        self.store.as_ref()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The drag gesture in progress, if any
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub(crate) fn drag_mut(&mut self) -> &mut DragSession {
        &mut self.drag
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Persist the current board.
    ///
    /// A store failure does not undo the in-memory change: it is logged and
    /// kept as a pending warning for the caller to surface.
    pub(crate) fn commit(&mut self) {
        if let Err(error) = persistence::save(self.store.as_mut(), &self.storage_key, &self.board)
        {
            tracing::warn!(
                key = %self.storage_key,
                store = %self.store.describe(),
                %error,
                "board changed in memory but could not be saved"
            );
            self.storage_warning = Some(error);
        }
    }

    /// Take the pending storage failure, if the last save(s) failed
    pub fn take_storage_warning(&mut self) -> Option<BoardError> {
        self.storage_warning.take()
    }

    /// Re-read the board from the store, dropping any drag in progress
    pub fn reload(&mut self) {
        self.board = persistence::load(self.store.as_ref(), &self.storage_key);
        self.drag = DragSession::Idle;
    }

    // =========================================================================
    // Activity
    // =========================================================================

    pub fn record_activity(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(ACTIVITY_CAPACITY);
    }

    /// Most recent activity, newest first
    pub fn recent_activity(&self, limit: usize) -> Vec<&LogEntry> {
        self.activity.iter().take(limit).collect()
    }
}

/// What an operation body did to the board
pub(crate) enum Outcome {
    /// State changed: persist and audit
    Changed(Value),
    /// Read or no-op gesture
    Unchanged(Value),
}

/// Run an operation body and wrap it into an [`ExecutionResult`].
///
/// Bodies validate before they touch the board, so an `Err` always means
/// the board is untouched.
pub(crate) fn run<O, F>(
    op: &O,
    ctx: &mut BoardContext,
    body: F,
) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
    F: FnOnce(&mut BoardContext) -> Result<Outcome>,
{
    let start = Instant::now();
    let result = body(ctx);

    match result {
        Ok(Outcome::Unchanged(value)) => ExecutionResult::Unlogged { value },
        Ok(Outcome::Changed(value)) => {
            ctx.commit();
            let duration_ms = start.elapsed().as_millis() as u64;
            let log_entry =
                LogEntry::new(op.op_string(), input_of(op), value.clone(), None, duration_ms);
            ExecutionResult::Logged { value, log_entry }
        }
        Err(error) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let log_entry =
                LogEntry::failure(op.op_string(), input_of(op), &error.to_string(), duration_ms);
            ExecutionResult::Failed {
                error,
                log_entry: Some(log_entry),
            }
        }
    }
}

fn input_of<O: Serialize>(op: &O) -> Value {
    serde_json::to_value(op).unwrap_or(Value::Null)
}
