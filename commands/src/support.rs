use async_trait::async_trait;
use chatr_core::{CommandError, RichContent};
use chrono::Utc;
use command_service::{Command, CommandContext, Responder};
use tracing::debug;

const SUPPORT_URL: &str = "https://github.com/chatr-rs/chatr/wiki/Support";

/// Sends the framework's support card, then the host's own card when one was configured.
pub struct SupportCommand {
    derived: Option<RichContent>,
}

impl SupportCommand {
    pub fn new(derived: Option<RichContent>) -> Self {
        Self { derived }
    }

    fn framework_card() -> RichContent {
        RichContent::new()
            .title("Support Chatr")
            .description(
                "You can show your love and appreciation for the framework that made this chatbot possible in the ways below!",
            )
            .url(SUPPORT_URL)
            .color(RichContent::GREEN)
            .field(
                "Sponsor",
                "The best way to support the developers is to sponsor the project on GitHub.",
            )
            .field(
                "Contribute",
                "Bug reports, docs and pull requests are always welcome.",
            )
            .field("Spread the word", "Tell a friend who runs a chat community.")
            .footer("Thank you for your consideration!")
            .timestamp(Utc::now())
    }
}

#[async_trait]
impl Command for SupportCommand {
    fn key(&self) -> &str {
        "support"
    }

    fn description(&self) -> Option<&str> {
        Some("Ways to support the project")
    }

    async fn invoke(&self, _ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError> {
        responder.rich(Self::framework_card());
        match &self.derived {
            Some(card) => responder.rich(card.clone()),
            None => debug!("No derived support card configured"),
        }
        Ok(())
    }
}
