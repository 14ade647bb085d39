//! chatr CLI: run the Telegram bot, or preview how text is tokenized. Config from env and optional CLI args.

use anyhow::{Context, Result};
use chatr_cli::{load_config, render_parse, Cli, Commands};
use chatr_core::init_tracing;
use clap::Parser;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            let log_file = config.log_file_path().to_string();
            if let Some(dir) = Path::new(&log_file).parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            }
            init_tracing(&log_file)?;
            info!(log_file = %log_file, version = env!("CARGO_PKG_VERSION"), "chatr starting");

            chatr_telegram::run_bot(config, env!("CARGO_PKG_VERSION"), Vec::new()).await
        }
        Commands::Parse {
            text,
            prefix,
            terminator,
        } => {
            println!("{}", render_parse(&text, &prefix, &terminator)?);
            Ok(())
        }
    }
}
