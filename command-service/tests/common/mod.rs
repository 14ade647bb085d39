//! Shared fixtures for command-service integration tests: sample messages and small test commands.

#![allow(dead_code)]

use async_trait::async_trait;
use chatr_core::{Chat, CommandError, DispatchError, Message, Reply, ReplyPayload, User};
use chrono::Utc;
use command_service::{
    ChannelOutbound, Command, CommandContext, CommandService, OutboundEvent, Responder,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn sample_message(user_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg-{}", user_id),
        user: User {
            id: user_id,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
            is_bot: false,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

pub fn bot_message(content: &str) -> Message {
    let mut message = sample_message(999, content);
    message.user.is_bot = true;
    message
}

/// Replies with its key followed by the parameters joined by `|`.
pub struct EchoCommand {
    pub key: &'static str,
}

#[async_trait]
impl Command for EchoCommand {
    fn key(&self) -> &str {
        self.key
    }

    fn description(&self) -> Option<&str> {
        Some("Echoes its parameters")
    }

    async fn invoke(&self, ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError> {
        responder.text(format!(
            "{}:{}",
            self.key,
            ctx.invocation.parameters.join("|")
        ));
        Ok(())
    }
}

/// Emits one reply, then fails.
pub struct FailingCommand;

#[async_trait]
impl Command for FailingCommand {
    fn key(&self) -> &str {
        "fail"
    }

    async fn invoke(&self, _ctx: &CommandContext<'_>, responder: &Responder) -> Result<(), CommandError> {
        responder.text("before failure");
        Err(CommandError::Failed("boom".to_string()))
    }
}

pub struct PanickingCommand;

#[async_trait]
impl Command for PanickingCommand {
    fn key(&self) -> &str {
        "panic"
    }

    async fn invoke(&self, _ctx: &CommandContext<'_>, _responder: &Responder) -> Result<(), CommandError> {
        panic!("handler exploded");
    }
}

/// A ready service with the given commands, plus the receiver of its outbound events.
pub fn ready_service(
    commands: Vec<Arc<dyn Command>>,
) -> (CommandService, mpsc::UnboundedReceiver<OutboundEvent>) {
    let (outbound, rx) = ChannelOutbound::channel();
    let service = CommandService::new(Arc::new(outbound));
    service.initialize("!", ";").expect("initialize");
    service.register_all(commands);
    service.finish_discovery().expect("finish discovery");
    (service, rx)
}

pub fn drain(rx: &mut mpsc::UnboundedReceiver<OutboundEvent>) -> Vec<OutboundEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub fn reply_texts(events: &[OutboundEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            OutboundEvent::Reply(Reply {
                payload: ReplyPayload::Text(text),
                ..
            }) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub fn exceptions(events: &[OutboundEvent]) -> Vec<&DispatchError> {
    events
        .iter()
        .filter_map(|event| match event {
            OutboundEvent::Exception(e) => Some(e),
            _ => None,
        })
        .collect()
}
