use crate::{HelloCommand, HelpCommand, ListCommand, SupportCommand, VersionCommand};
use chatr_core::RichContent;
use command_service::Command;
use std::sync::Arc;

/// Version of the framework itself, reported by `version` next to the host's version.
pub const FRAMEWORK_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DOCS_URL: &str = "https://github.com/chatr-rs/chatr/wiki";

/// Host-specific values the built-ins show to users.
#[derive(Debug, Clone)]
pub struct BuiltinOptions {
    /// Display name used in help and list titles.
    pub nickname: String,
    /// Version of the hosting bot.
    pub bot_version: String,
    /// Extra card `support` sends after the framework's own.
    pub derived_support: Option<RichContent>,
}

impl Default for BuiltinOptions {
    fn default() -> Self {
        Self {
            nickname: chatr_core::settings::DEFAULT_NICKNAME.to_string(),
            bot_version: FRAMEWORK_VERSION.to_string(),
            derived_support: None,
        }
    }
}

/// The built-in commands in registration order: list, help, hello, version, support.
pub fn builtin_commands(options: &BuiltinOptions) -> Vec<Arc<dyn Command>> {
    vec![
        Arc::new(ListCommand::new(options.nickname.clone())),
        Arc::new(HelpCommand::new(options.nickname.clone())),
        Arc::new(HelloCommand),
        Arc::new(VersionCommand::new(options.bot_version.clone())),
        Arc::new(SupportCommand::new(options.derived_support.clone())),
    ]
}
