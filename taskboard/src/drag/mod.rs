//! Reorder engine: the drag session and the commands that drive it
//!
//! A gesture starts with [`StartTaskDrag`] or [`StartColumnDrag`] and ends
//! with [`DropOnColumn`] or [`CancelDrag`]. A drop resolves to exactly one
//! move (task to the end of a column, or column splice) or to nothing.

mod release;
mod session;
mod start;

pub use release::{CancelDrag, DropOnColumn};
pub use session::{DragSession, DropAction, DropTarget};
pub use start::{StartColumnDrag, StartTaskDrag};
