//! Outbound transport abstraction.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in chatr-telegram.

use crate::error::Result;
use crate::types::{MessageRef, Reply, ReplyPayload, RichContent};
use async_trait::async_trait;

/// Sends replies to the chat a message came from. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends plain text to the chat of `target`.
    async fn send_text(&self, target: &MessageRef, text: &str) -> Result<()>;

    /// Sends structured content. Default: render to plain text.
    async fn send_rich(&self, target: &MessageRef, content: &RichContent) -> Result<()> {
        self.send_text(target, &content.to_plain_text()).await
    }

    /// Delivers a reply by payload kind.
    async fn deliver(&self, reply: &Reply) -> Result<()> {
        match &reply.payload {
            ReplyPayload::Text(text) => self.send_text(&reply.target, text).await,
            ReplyPayload::Rich(content) => self.send_rich(&reply.target, content).await,
        }
    }
}
