use async_trait::async_trait;
use chatr_core::CommandError;
use command_service::{Command, CommandContext, Responder};

/// Greets the author by mention.
pub struct HelloCommand;

#[async_trait]
impl Command for HelloCommand {
    fn key(&self) -> &str {
        "hello"
    }

    fn description(&self) -> Option<&str> {
        Some("Say hello")
    }

    async fn invoke(&self, ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError> {
        responder.text(format!("Hello {}!", ctx.message.user.mention()));
        Ok(())
    }
}
