//! Task commands

mod add;
mod delete;
mod get;
mod mv;
mod recolor;
mod rename;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use get::GetTask;
pub use mv::MoveTask;
pub use recolor::RecolorTask;
pub use rename::RenameTask;

pub(crate) use mv::transfer_task;
