//! Telegram host configuration: token, API URL, log path, and the command settings.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE, plus the
//! COMMAND_PREFIX / COMMAND_TERMINATOR / IGNORE_BOT_MESSAGES / BOT_NICKNAME variables.

use anyhow::Result;
use chatr_core::CommandSettings;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/chatr.log";

pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
    pub commands: CommandSettings,
}

impl TelegramConfig {
    /// Loads from the environment. `token`, when given, overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        Self::from_lookup(token, |name| env::var(name).ok())
    }

    pub fn from_lookup<F>(token: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = token
            .or_else(|| lookup("BOT_TOKEN"))
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = lookup("TELEGRAM_API_URL").or_else(|| lookup("TELOXIDE_API_URL"));
        let log_file = lookup("LOG_FILE");
        let commands = CommandSettings::from_lookup(&lookup)?;
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            commands,
        })
    }

    /// Uses the given token; everything else defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
            commands: CommandSettings::default(),
        }
    }

    pub fn log_file_path(&self) -> &str {
        self.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.log_file.is_none());
        assert_eq!(config.log_file_path(), DEFAULT_LOG_FILE);
        assert_eq!(config.commands, CommandSettings::default());
    }

    #[test]
    fn test_missing_token_fails() {
        assert!(TelegramConfig::from_lookup(None, lookup_from(&[])).is_err());
        assert!(TelegramConfig::from_lookup(None, lookup_from(&[("BOT_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_token_argument_overrides_env() {
        let config = TelegramConfig::from_lookup(
            Some("cli_token".to_string()),
            lookup_from(&[("BOT_TOKEN", "env_token")]),
        )
        .unwrap();
        assert_eq!(config.bot_token, "cli_token");
    }

    #[test]
    fn test_loads_api_url_fallback_and_command_settings() {
        let config = TelegramConfig::from_lookup(
            None,
            lookup_from(&[
                ("BOT_TOKEN", "env_token"),
                ("TELOXIDE_API_URL", "http://localhost:8081"),
                ("LOG_FILE", "/tmp/chatr.log"),
                ("COMMAND_PREFIX", "?"),
            ]),
        )
        .unwrap();
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
        assert_eq!(config.log_file_path(), "/tmp/chatr.log");
        assert_eq!(config.commands.prefix, "?");
        assert_eq!(config.commands.terminator, ";");
    }
}
