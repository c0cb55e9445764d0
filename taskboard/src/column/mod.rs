//! Column commands

mod add;
mod delete;
mod list;
mod mv;
mod rename;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use list::ListColumns;
pub use mv::MoveColumn;
pub use rename::RenameColumn;

pub(crate) use mv::splice_column;
