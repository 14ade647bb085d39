//! # Command service
//!
//! Owns the parser configuration and the registry, and dispatches every command found in a message to its
//! handler. Lifecycle: `Uninitialized` → [`CommandService::initialize`] → `Discovering` (handlers are
//! registered) → [`CommandService::finish_discovery`] → `Ready` for the rest of the process.
//!
//! The registry is built behind a mutex during discovery and frozen into a `OnceLock` when discovery ends,
//! so every registration happens-before any dispatch and dispatch reads it without locking.

use crate::command::{Command, CommandContext, CommandDefinition, CommandInvocation, Responder};
use crate::outbound::Outbound;
use crate::registry::CommandRegistry;
use crate::tokenizer::{tokenize, ParserConfig};
use chatr_core::{CommandError, DispatchError, Message};
use futures::FutureExt;
use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Discovering,
    Ready,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Discovering => "discovering",
            Phase::Ready => "ready",
        };
        f.write_str(name)
    }
}

pub struct CommandService {
    outbound: Arc<dyn Outbound>,
    ignore_bot_messages: bool,
    config: OnceLock<ParserConfig>,
    pending: Mutex<CommandRegistry>,
    registry: OnceLock<CommandRegistry>,
}

impl CommandService {
    /// Creates an uninitialized service reporting through `outbound`. Bot-authored messages are ignored by default.
    pub fn new(outbound: Arc<dyn Outbound>) -> Self {
        Self {
            outbound,
            ignore_bot_messages: true,
            config: OnceLock::new(),
            pending: Mutex::new(CommandRegistry::new()),
            registry: OnceLock::new(),
        }
    }

    pub fn with_bot_filter(mut self, ignore_bot_messages: bool) -> Self {
        self.ignore_bot_messages = ignore_bot_messages;
        self
    }

    pub fn phase(&self) -> Phase {
        if self.registry.get().is_some() {
            Phase::Ready
        } else if self.config.get().is_some() {
            Phase::Discovering
        } else {
            Phase::Uninitialized
        }
    }

    /// Parser configuration, once initialized.
    pub fn config(&self) -> Option<&ParserConfig> {
        self.config.get()
    }

    /// Frozen registry, once ready.
    pub fn registry(&self) -> Option<&CommandRegistry> {
        self.registry.get()
    }

    /// Validates the delimiters and opens the discovery phase. Fails on empty delimiters or a second call.
    pub fn initialize(&self, prefix: &str, terminator: &str) -> Result<(), DispatchError> {
        if self.config.get().is_some() {
            return Err(already_initialized());
        }
        let config = ParserConfig::new(prefix, terminator)?;
        self.config.set(config).map_err(|_| already_initialized())?;
        info!(prefix = %prefix, terminator = %terminator, "step: command service initialized");
        Ok(())
    }

    /// Registers one handler during discovery. A failure is reported on the exception channel and
    /// leaves the service usable for further registrations. Returns whether the handler was added.
    pub fn register_handler(&self, handler: Arc<dyn Command>) -> bool {
        let definition = CommandDefinition::new(handler);
        let key = definition.key().to_string();
        match self.try_register(definition) {
            Ok(()) => {
                info!(key = %key, "step: command registered");
                true
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Command registration rejected");
                self.outbound.on_exception(e);
                false
            }
        }
    }

    /// Registers each handler in order; returns how many were added.
    pub fn register_all<I>(&self, handlers: I) -> usize
    where
        I: IntoIterator<Item = Arc<dyn Command>>,
    {
        handlers
            .into_iter()
            .filter(|handler| self.register_handler(Arc::clone(handler)))
            .count()
    }

    fn try_register(&self, definition: CommandDefinition) -> Result<(), DispatchError> {
        let mut pending = self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let Some(config) = self.config.get() else {
            return Err(registration_error(&definition, "command service is not initialized"));
        };
        if self.registry.get().is_some() {
            return Err(registration_error(&definition, "discovery already finished"));
        }
        if definition.key().contains(config.prefix()) || definition.key().contains(config.terminator()) {
            return Err(registration_error(
                &definition,
                "key contains the command prefix or terminator",
            ));
        }
        pending.register(definition)
    }

    /// Closes discovery and makes the service dispatch-capable.
    pub fn finish_discovery(&self) -> Result<(), DispatchError> {
        if self.config.get().is_none() {
            return Err(DispatchError::Configuration(
                "initialize must run before discovery can finish".to_string(),
            ));
        }
        let mut pending = self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.registry.get().is_some() {
            return Err(DispatchError::Configuration(
                "discovery already finished".to_string(),
            ));
        }
        let registry = std::mem::take(&mut *pending);
        let count = registry.len();
        self.registry.set(registry).map_err(|_| {
            DispatchError::Configuration("discovery already finished".to_string())
        })?;
        info!(commands = count, "step: discovery finished, command service ready");
        Ok(())
    }

    /// Dispatches every command in `message`. Safe to call concurrently. Never fails: handler errors,
    /// panics and messages arriving before the service is ready go to the exception channel; unknown
    /// keys and text without commands are ignored silently.
    #[instrument(skip(self, message), fields(message_id = %message.id, chat_id = message.chat.id))]
    pub async fn process_message(&self, message: &Message) {
        if self.ignore_bot_messages && message.user.is_bot {
            debug!(user_id = message.user.id, "Ignoring bot-authored message");
            return;
        }

        let (Some(config), Some(registry)) = (self.config.get(), self.registry.get()) else {
            warn!(phase = %self.phase(), "Message received before command service was ready");
            self.outbound.on_exception(DispatchError::NotReady {
                phase: self.phase().to_string(),
            });
            return;
        };

        let commands = tokenize(&message.content, config);
        if commands.is_empty() {
            return;
        }
        info!(
            user_id = message.user.id,
            commands = commands.len(),
            "step: message tokenized"
        );

        let source = message.reference();
        for parsed in commands {
            match CommandInvocation::new(parsed, source.clone()) {
                Ok(invocation) => self.dispatch(message, config, registry, &invocation).await,
                Err(e) => {
                    error!(error = %e, "Tokenizer invariant violated");
                    self.outbound.on_exception(e);
                }
            }
        }
    }

    async fn dispatch(
        &self,
        message: &Message,
        config: &ParserConfig,
        registry: &CommandRegistry,
        invocation: &CommandInvocation,
    ) {
        let Some(definition) = registry.lookup(&invocation.key) else {
            debug!(key = %invocation.key, "Unknown command ignored");
            return;
        };

        info!(
            user_id = message.user.id,
            key = %definition.key(),
            parameters = invocation.parameters.len(),
            "step: command invoking"
        );

        let responder = Responder::new(invocation.source.clone(), Arc::clone(&self.outbound));
        let ctx = CommandContext {
            invocation,
            message,
            registry,
            config,
        };
        let outcome = AssertUnwindSafe(definition.handler().invoke(&ctx, &responder))
            .catch_unwind()
            .await;

        let failure = match outcome {
            Ok(Ok(())) => {
                info!(
                    key = %definition.key(),
                    replies = responder.sent(),
                    "step: command done"
                );
                return;
            }
            Ok(Err(e)) => e,
            Err(panic) => CommandError::Panicked(panic_message(panic.as_ref())),
        };

        error!(
            key = %definition.key(),
            replies = responder.sent(),
            error = %failure,
            "Command failed"
        );
        self.outbound.on_exception(DispatchError::HandlerExecution {
            key: definition.key().to_string(),
            source: failure,
        });
    }
}

fn already_initialized() -> DispatchError {
    DispatchError::Configuration("command service already initialized".to_string())
}

fn registration_error(definition: &CommandDefinition, reason: &str) -> DispatchError {
    DispatchError::Registration {
        key: definition.key().to_string(),
        reason: reason.to_string(),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
