//! The `Operation` metadata trait and the `Execute` trait

use crate::ExecutionResult;
use serde_json::Value;

/// Metadata every operation carries, usually generated by `#[operation]`
pub trait Operation {
    /// The action, e.g. `"move"`
    fn verb(&self) -> &'static str;

    /// The entity acted on, e.g. `"task"`
    fn noun(&self) -> &'static str;

    /// Human readable summary
    fn description(&self) -> &'static str;

    /// Canonical `"verb noun"` string used in logs and intents
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation to completion against a context.
///
/// Execution is synchronous and takes the context mutably: one operation
/// owns the state for the whole call, so no other mutation can interleave.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}
