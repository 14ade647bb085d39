//! Wraps teloxide::Bot and implements [`chatr_core::Bot`]. Production code sends replies via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use chatr_core::{Bot as CoreBot, ChatrError, MessageRef, Result};
use teloxide::{prelude::*, types::ChatId};

/// Thin wrapper around teloxide::Bot that implements chatr-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, target: &MessageRef, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(target.chat.id), text.to_string())
            .await
            .map_err(|e| ChatrError::Bot(e.to_string()))?;
        Ok(())
    }
}
