//! # chatr-cli
//!
//! CLI foundation: argument parsing, config loading, parse preview.

pub mod cli;

pub use chatr_telegram::TelegramConfig;
pub use cli::{load_config, render_parse, Cli, Commands};
