//! Board commands

mod export;
mod get;
mod import;
mod reset;

pub use export::ExportBoard;
pub use get::GetBoard;
pub use import::ImportBoard;
pub use reset::ResetBoard;
