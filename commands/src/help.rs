use async_trait::async_trait;
use chatr_core::{CommandError, RichContent};
use command_service::{Command, CommandContext, Responder};

use crate::builtin::DOCS_URL;

/// Points lost users at `list` and the project documentation.
pub struct HelpCommand {
    nickname: String,
}

impl HelpCommand {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
        }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn key(&self) -> &str {
        "help"
    }

    fn description(&self) -> Option<&str> {
        Some("How to use this bot")
    }

    async fn invoke(&self, ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError> {
        let prefix = ctx.config.prefix();
        let terminator = ctx.config.terminator();
        let description = format!(
            "Oh, umm, hello there! 👋\n\n\
             Sorry that you're having trouble using me. If it's a list of available commands you're after, \
             send `{prefix}list{terminator}`. Commands start with `{prefix}`, end with `{terminator}` and take \
             comma-separated parameters, e.g. `{prefix}command first, second{terminator}`. \
             Anything else is in the documentation linked below."
        );
        responder.rich(
            RichContent::new()
                .title(format!("{} Help", self.nickname))
                .description(description)
                .url(DOCS_URL)
                .color(RichContent::RED),
        );
        Ok(())
    }
}
