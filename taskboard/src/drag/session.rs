//! Drag session state machine

use crate::types::TaskId;
use serde::{Deserialize, Serialize};

/// The single drag gesture in progress.
///
/// `Idle -> DraggingTask | DraggingColumn -> Idle`. Starting a drag replaces
/// whatever was in flight; every drop or cancel lands back in `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    /// A task card picked up from `source`
    DraggingTask { id: TaskId, source: String },
    /// A column header picked up at `index`; `name` identifies it at drop time
    DraggingColumn { index: usize, name: String },
}

/// A column a dragged item is released over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub index: usize,
    pub name: String,
}

impl DropTarget {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// The move a drop resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    MoveTask { id: TaskId, from: String, to: String },
    /// Move the column called `name`, wherever it is now, to index `to`
    MoveColumn { name: String, to: usize },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Pick up a task card, implicitly cancelling any previous gesture
    pub fn start_task(&mut self, id: TaskId, source: impl Into<String>) -> Option<DragSession> {
        self.replace(Self::DraggingTask {
            id,
            source: source.into(),
        })
    }

    /// Pick up a column header, implicitly cancelling any previous gesture
    pub fn start_column(&mut self, index: usize, name: impl Into<String>) -> Option<DragSession> {
        self.replace(Self::DraggingColumn {
            index,
            name: name.into(),
        })
    }

    /// Release over `target`. The session is `Idle` afterwards whatever the
    /// outcome.
    pub fn resolve_drop(&mut self, target: &DropTarget) -> Option<DropAction> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::DraggingTask { id, source } => Some(DropAction::MoveTask {
                id,
                from: source,
                to: target.name.clone(),
            }),
            Self::DraggingColumn { name, .. } => Some(DropAction::MoveColumn {
                name,
                to: target.index,
            }),
        }
    }

    /// Abandon the gesture; returns what was in flight
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.replace(Self::Idle)
    }

    fn replace(&mut self, next: DragSession) -> Option<DragSession> {
        let previous = std::mem::replace(self, next);
        (!previous.is_idle()).then_some(previous)
    }
}
