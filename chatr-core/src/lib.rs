//! # chatr-core
//!
//! Core types and traits for the chatr command framework: [`Bot`], [`Message`], [`Reply`], error types,
//! [`CommandSettings`] and tracing initialization. Transport-agnostic; used by command-service and chatr-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod settings;
pub mod types;

pub use bot::Bot;
pub use error::{ChatrError, CommandError, DispatchError, Result};
pub use logger::init_tracing;
pub use settings::CommandSettings;
pub use types::{
    Chat, Message, MessageRef, Reply, ReplyPayload, RichContent, RichField, ToCoreMessage, ToCoreUser,
    User,
};
