//! Drains the outbound channel: replies go to the [`Bot`], exceptions to the log.

use crate::outbound::OutboundEvent;
use chatr_core::Bot;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Delivers events one at a time, so replies reach the transport in the order they were emitted.
/// Returns when every sender has been dropped.
#[instrument(skip(events, bot))]
pub async fn relay_events(mut events: mpsc::UnboundedReceiver<OutboundEvent>, bot: Arc<dyn Bot>) {
    while let Some(event) = events.recv().await {
        match event {
            OutboundEvent::Reply(reply) => {
                let chat_id = reply.target.chat.id;
                match bot.deliver(&reply).await {
                    Ok(()) => info!(
                        chat_id = chat_id,
                        message_id = %reply.target.message_id,
                        "Reply sent"
                    ),
                    Err(e) => error!(chat_id = chat_id, error = %e, "Failed to send reply"),
                }
            }
            OutboundEvent::Exception(e) => {
                error!(error = %e, "Command service reported an error");
            }
        }
    }
    info!("Outbound channel closed, relay stopped");
}
