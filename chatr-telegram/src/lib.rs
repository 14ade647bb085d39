//! # chatr-telegram
//!
//! Telegram host for the command service: adapters, [`chatr_core::Bot`] implementation, config, REPL runner.
//! Handles only Telegram connectivity; command recognition and dispatch live in command-service.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{TelegramConfig, DEFAULT_LOG_FILE};
pub use runner::{build_bot, run_bot, run_repl};
