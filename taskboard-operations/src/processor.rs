//! Processor trait: run an operation and route its log entry

use crate::Execute;
use serde_json::Value;

/// Wraps operation execution with cross-cutting concerns such as actor
/// attribution and audit logging.
pub trait OperationProcessor<C, E> {
    /// Execute the operation, record its log entry if any, and return the value
    fn process<O>(&self, operation: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Execute<C, E>;
}
