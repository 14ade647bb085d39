//! Command handler contract: [`Command`] trait, the invocation it receives, and the [`Responder`] it replies through.

use crate::outbound::Outbound;
use crate::registry::CommandRegistry;
use crate::tokenizer::{ParsedCommand, ParserConfig};
use async_trait::async_trait;
use chatr_core::{CommandError, DispatchError, Message, MessageRef, Reply, ReplyPayload, RichContent};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One recognized command occurrence, addressed back to the message it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub key: String,
    pub parameters: Vec<String>,
    pub source: MessageRef,
}

impl CommandInvocation {
    /// Binds a parsed command to its source message. An empty key here means the tokenizer broke its contract.
    pub fn new(parsed: ParsedCommand, source: MessageRef) -> Result<Self, DispatchError> {
        if parsed.key.trim().is_empty() {
            return Err(DispatchError::Tokenize(
                "tokenizer produced an invocation without a key".to_string(),
            ));
        }
        Ok(Self {
            key: parsed.key,
            parameters: parsed.parameters,
            source,
        })
    }

    pub fn parameter(&self, index: usize) -> Option<&str> {
        self.parameters.get(index).map(String::as_str)
    }
}

/// Everything a handler may read while it runs.
pub struct CommandContext<'a> {
    pub invocation: &'a CommandInvocation,
    pub message: &'a Message,
    pub registry: &'a CommandRegistry,
    pub config: &'a ParserConfig,
}

/// Reply channel handed to a handler. Each call is forwarded to the outbound sink immediately.
pub struct Responder {
    target: MessageRef,
    outbound: Arc<dyn Outbound>,
    sent: AtomicUsize,
}

impl Responder {
    pub fn new(target: MessageRef, outbound: Arc<dyn Outbound>) -> Self {
        Self {
            target,
            outbound,
            sent: AtomicUsize::new(0),
        }
    }

    pub fn text(&self, text: impl Into<String>) {
        self.emit(ReplyPayload::Text(text.into()));
    }

    pub fn rich(&self, content: RichContent) {
        self.emit(ReplyPayload::Rich(content));
    }

    /// Number of replies emitted so far.
    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::Relaxed)
    }

    fn emit(&self, payload: ReplyPayload) {
        self.sent.fetch_add(1, Ordering::Relaxed);
        self.outbound.on_reply(Reply {
            target: self.target.clone(),
            payload,
        });
    }
}

/// A command handler bound to one key. Handlers hold no shared mutable state; anything slow should be
/// spawned rather than awaited, because the dispatch of later commands in the same message waits on it.
#[async_trait]
pub trait Command: Send + Sync {
    /// Identifier users type after the prefix. Matched case-insensitively.
    fn key(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    async fn invoke(&self, ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError>;
}

/// Registered form of a [`Command`]: key and description captured once at registration.
#[derive(Clone)]
pub struct CommandDefinition {
    key: String,
    description: Option<String>,
    handler: Arc<dyn Command>,
}

impl CommandDefinition {
    pub fn new(handler: Arc<dyn Command>) -> Self {
        Self {
            key: handler.key().trim().to_string(),
            description: handler.description().map(str::to_string),
            handler,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn handler(&self) -> &Arc<dyn Command> {
        &self.handler
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("key", &self.key)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
