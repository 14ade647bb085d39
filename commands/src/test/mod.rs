//! Unit test module
//!
//! Built-in command tests live here, separate from source files. Each test runs a command through a
//! ready [`command_service::CommandService`] and inspects the drained outbound events.

mod builtin_test;

use chatr_core::{Chat, Message, ReplyPayload, User};
use chrono::Utc;
use command_service::{ChannelOutbound, Command, CommandService, OutboundEvent};
use std::sync::Arc;

fn sample_message(content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 1,
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

/// Registers `commands` on a fresh `!`/`;` service, processes `content` and returns the reply payloads.
async fn run(commands: Vec<Arc<dyn Command>>, content: &str) -> Vec<ReplyPayload> {
    let (outbound, mut rx) = ChannelOutbound::channel();
    let service = CommandService::new(Arc::new(outbound));
    service.initialize("!", ";").unwrap();
    service.register_all(commands);
    service.finish_discovery().unwrap();

    service.process_message(&sample_message(content)).await;

    let mut payloads = Vec::new();
    while let Ok(event) = rx.try_recv() {
        match event {
            OutboundEvent::Reply(reply) => payloads.push(reply.payload),
            OutboundEvent::Exception(e) => panic!("unexpected exception: {e}"),
        }
    }
    payloads
}

fn one(command: impl Command + 'static) -> Vec<Arc<dyn Command>> {
    let command: Arc<dyn Command> = Arc::new(command);
    vec![command]
}
