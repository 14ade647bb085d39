use async_trait::async_trait;
use chatr_core::CommandError;
use command_service::{Command, CommandContext, Responder};

use crate::builtin::FRAMEWORK_VERSION;

/// Reports the hosting bot's version and the framework version.
pub struct VersionCommand {
    bot_version: String,
}

impl VersionCommand {
    pub fn new(bot_version: impl Into<String>) -> Self {
        Self {
            bot_version: bot_version.into(),
        }
    }
}

#[async_trait]
impl Command for VersionCommand {
    fn key(&self) -> &str {
        "version"
    }

    fn description(&self) -> Option<&str> {
        Some("Show bot and framework versions")
    }

    async fn invoke(&self, _ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError> {
        responder.text(format!(
            "```\nBot Version: {}\nChatr Version: {}\n```",
            self.bot_version, FRAMEWORK_VERSION
        ));
        Ok(())
    }
}
