//! # command-service
//!
//! Recognizes commands embedded in chat messages and dispatches them to registered handlers:
//! [`tokenize`] extracts invocations, [`CommandRegistry`] maps keys to handlers, and [`CommandService`]
//! runs the lifecycle and dispatch. Replies and failures leave through an [`Outbound`] sink.

pub mod command;
pub mod context;
pub mod outbound;
pub mod registry;
pub mod relay;
pub mod service;
pub mod tokenizer;

pub use command::{Command, CommandContext, CommandDefinition, CommandInvocation, Responder};
pub use context::AppContext;
pub use outbound::{CallbackOutbound, ChannelOutbound, Outbound, OutboundEvent};
pub use registry::CommandRegistry;
pub use relay::relay_events;
pub use service::{CommandService, Phase};
pub use tokenizer::{tokenize, ParsedCommand, ParserConfig};

// Integration tests live in tests/*.rs
