//! # Domain Traits
//!
//! Abstract interfaces the engine consumes from its host.
//! The transport layer (Matrix, Discord, a terminal) implements these.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::types::Source;

/// Where and by whom a command was invoked, plus a way to answer.
#[async_trait]
pub trait CommandContext: Send + Sync {
    /// Source identity used for scope checks and by argument validation.
    fn source(&self) -> &Source;

    /// Send a message back to the originating conversation.
    async fn reply(&self, content: &str) -> Result<(), String>;
}

/// A message handed to the engine by the platform.
#[derive(Clone)]
pub struct IncomingMessage {
    pub text: String,
    pub context: Arc<dyn CommandContext>,
}

/// Supplies `(text, context)` pairs. Connection lifecycle belongs to the implementor.
#[async_trait]
pub trait EventSource: Send {
    /// Next message, or `None` once the source is exhausted.
    async fn next_event(&mut self) -> Option<IncomingMessage>;
}
