//! Command settings: delimiters, bot-message filter, nickname.
//! Loaded from COMMAND_PREFIX, COMMAND_TERMINATOR, IGNORE_BOT_MESSAGES, BOT_NICKNAME.

use crate::error::{ChatrError, Result};
use std::env;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_TERMINATOR: &str = ";";
pub const DEFAULT_NICKNAME: &str = "Chatr Bot";

/// Settings read once at startup and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSettings {
    pub prefix: String,
    pub terminator: String,
    pub ignore_bot_messages: bool,
    pub nickname: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            ignore_bot_messages: true,
            nickname: DEFAULT_NICKNAME.to_string(),
        }
    }
}

impl CommandSettings {
    /// Loads from the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let ignore_bot_messages = match lookup("IGNORE_BOT_MESSAGES") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ChatrError::Config(format!("IGNORE_BOT_MESSAGES is not a boolean: {}", raw))
            })?,
            None => defaults.ignore_bot_messages,
        };
        Ok(Self {
            prefix: lookup("COMMAND_PREFIX").unwrap_or(defaults.prefix),
            terminator: lookup("COMMAND_TERMINATOR").unwrap_or(defaults.terminator),
            ignore_bot_messages,
            nickname: lookup("BOT_NICKNAME").unwrap_or(defaults.nickname),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
