//! Board operation processor
//!
//! Runs operations against a [`BoardContext`], stamps the actor on every log
//! entry, emits it as a tracing event and keeps it in the context's activity.

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use serde_json::Value;
use taskboard_operations::{Execute, OperationProcessor};

/// Processor for board operations
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    /// Create a processor without actor attribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every logged operation to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

impl OperationProcessor<BoardContext, BoardError> for BoardOperationProcessor {
    fn process<O>(&self, operation: &O, ctx: &mut BoardContext) -> Result<Value>
    where
        O: Execute<BoardContext, BoardError>,
    {
        let (result, log_entry) = operation.execute(ctx).split();

        if let Some(mut entry) = log_entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.clone());
            }
            if entry.is_failure() {
                tracing::debug!(
                    op = %entry.op,
                    actor = entry.actor.as_deref().unwrap_or("-"),
                    output = %entry.output,
                    "operation rejected"
                );
            } else {
                tracing::info!(
                    op = %entry.op,
                    actor = entry.actor.as_deref().unwrap_or("-"),
                    duration_ms = entry.duration_ms,
                    "operation applied"
                );
            }
            ctx.record_activity(entry);
        }

        result
    }
}
