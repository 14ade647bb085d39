use async_trait::async_trait;
use chatr_core::{CommandError, RichContent};
use command_service::{Command, CommandContext, Responder};

/// Lists every registered key in registration order.
pub struct ListCommand {
    nickname: String,
}

impl ListCommand {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
        }
    }
}

#[async_trait]
impl Command for ListCommand {
    fn key(&self) -> &str {
        "list"
    }

    fn description(&self) -> Option<&str> {
        Some("List available commands")
    }

    async fn invoke(&self, ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError> {
        let keys = ctx.registry.list_keys().join("\n");
        let description = format!(
            "You need a list of commands? I got you! Prefix any of the following with `{}` and you're ready to go!\n\n```\n{}\n```",
            ctx.config.prefix(),
            keys
        );
        responder.rich(
            RichContent::new()
                .title(format!("{} Commands", self.nickname))
                .description(description)
                .color(RichContent::RED),
        );
        Ok(())
    }
}
