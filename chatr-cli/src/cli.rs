//! CLI parser, config loading and the offline `parse` rendering.

use anyhow::Result;
use chatr_telegram::TelegramConfig;
use clap::{Parser, Subcommand};
use command_service::{tokenize, ParserConfig};

#[derive(Parser, Debug)]
#[command(name = "chatr")]
#[command(about = "Chat command bot: run on Telegram, or inspect how text is parsed", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the commands found in TEXT without running any handler.
    Parse {
        text: String,
        #[arg(long, default_value = chatr_core::settings::DEFAULT_PREFIX)]
        prefix: String,
        #[arg(long, default_value = chatr_core::settings::DEFAULT_TERMINATOR)]
        terminator: String,
    },
}

/// Load TelegramConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<TelegramConfig> {
    TelegramConfig::load(token)
}

/// One line per recognized command: `key [param, param]`; a note when there are none.
pub fn render_parse(text: &str, prefix: &str, terminator: &str) -> Result<String> {
    let config = ParserConfig::new(prefix, terminator)?;
    let commands = tokenize(text, &config);
    if commands.is_empty() {
        return Ok("no commands found".to_string());
    }
    let lines: Vec<String> = commands
        .iter()
        .map(|c| format!("{} {:?}", c.key, c.parameters))
        .collect();
    Ok(lines.join("\n"))
}
