//! Outbound notification sinks: the only way replies and failures leave the service.

use chatr_core::{DispatchError, Reply};
use tokio::sync::mpsc;
use tracing::warn;

/// Receives one-shot notifications from the service. Calls must not block; the service invokes them
/// inline on the dispatch path, in invocation order.
pub trait Outbound: Send + Sync {
    fn on_reply(&self, reply: Reply);
    fn on_exception(&self, error: DispatchError);
}

#[derive(Debug)]
pub enum OutboundEvent {
    Reply(Reply),
    Exception(DispatchError),
}

/// Forwards notifications into an unbounded channel drained by the host (see [`crate::relay_events`]).
#[derive(Clone)]
pub struct ChannelOutbound {
    tx: mpsc::UnboundedSender<OutboundEvent>,
}

impl ChannelOutbound {
    /// Creates the sink and the receiver the caller drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<OutboundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: OutboundEvent) {
        if let Err(e) = self.tx.send(event) {
            warn!(event = ?e.0, "Outbound receiver dropped, notification discarded");
        }
    }
}

impl Outbound for ChannelOutbound {
    fn on_reply(&self, reply: Reply) {
        self.send(OutboundEvent::Reply(reply));
    }

    fn on_exception(&self, error: DispatchError) {
        self.send(OutboundEvent::Exception(error));
    }
}

/// Sink backed by two plain callbacks.
pub struct CallbackOutbound<R, E>
where
    R: Fn(Reply) + Send + Sync,
    E: Fn(DispatchError) + Send + Sync,
{
    on_reply: R,
    on_exception: E,
}

impl<R, E> CallbackOutbound<R, E>
where
    R: Fn(Reply) + Send + Sync,
    E: Fn(DispatchError) + Send + Sync,
{
    pub fn new(on_reply: R, on_exception: E) -> Self {
        Self {
            on_reply,
            on_exception,
        }
    }
}

impl<R, E> Outbound for CallbackOutbound<R, E>
where
    R: Fn(Reply) + Send + Sync,
    E: Fn(DispatchError) + Send + Sync,
{
    fn on_reply(&self, reply: Reply) {
        (self.on_reply)(reply)
    }

    fn on_exception(&self, error: DispatchError) {
        (self.on_exception)(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatr_core::{Chat, MessageRef, ReplyPayload};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn reply(text: &str) -> Reply {
        Reply {
            target: MessageRef {
                chat: Chat {
                    id: 1,
                    chat_type: "private".to_string(),
                },
                message_id: "1".to_string(),
            },
            payload: ReplyPayload::Text(text.to_string()),
        }
    }

    #[test]
    fn test_channel_outbound_preserves_order() {
        let (outbound, mut rx) = ChannelOutbound::channel();
        outbound.on_reply(reply("first"));
        outbound.on_exception(DispatchError::Tokenize("bad".to_string()));
        outbound.on_reply(reply("second"));

        assert!(matches!(rx.try_recv(), Ok(OutboundEvent::Reply(r)) if r.payload == ReplyPayload::Text("first".to_string())));
        assert!(matches!(rx.try_recv(), Ok(OutboundEvent::Exception(DispatchError::Tokenize(_)))));
        assert!(matches!(rx.try_recv(), Ok(OutboundEvent::Reply(r)) if r.payload == ReplyPayload::Text("second".to_string())));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_outbound_with_dropped_receiver_does_not_panic() {
        let (outbound, rx) = ChannelOutbound::channel();
        drop(rx);
        outbound.on_reply(reply("lost"));
    }

    #[test]
    fn test_callback_outbound_routes_by_kind() {
        let replies = Arc::new(AtomicUsize::new(0));
        let errors = Arc::new(AtomicUsize::new(0));
        let (r, e) = (Arc::clone(&replies), Arc::clone(&errors));
        let outbound = CallbackOutbound::new(
            move |_| {
                r.fetch_add(1, Ordering::SeqCst);
            },
            move |_| {
                e.fetch_add(1, Ordering::SeqCst);
            },
        );
        outbound.on_reply(reply("hi"));
        outbound.on_exception(DispatchError::Tokenize("bad".to_string()));
        outbound.on_reply(reply("again"));
        assert_eq!(replies.load(Ordering::SeqCst), 2);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }
}
