//! REPL runner: converts teloxide messages to core::Message and hands each one to the command service.
//! Replies travel back through the outbound channel, drained by [`relay_events`] into [`TelegramBotAdapter`].

use anyhow::Result;
use chatr_core::{Bot as CoreBot, ToCoreMessage};
use command_service::{relay_events, AppContext, ChannelOutbound, Command};
use commands::{builtin_commands, BuiltinOptions};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use super::config::TelegramConfig;

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when one is configured and valid.
pub fn build_bot(config: &TelegramConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Starts the REPL. Each text message is dispatched on its own task so a slow command never holds up
/// the next update.
#[instrument(skip(bot, context))]
pub async fn run_repl(bot: teloxide::Bot, context: AppContext) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(
                username = %username,
                nickname = %context.settings().nickname,
                "Bot identity resolved before repl"
            );
        }
    }

    let service = Arc::clone(context.service());
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let service = Arc::clone(&service);

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_some() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %core_msg.content,
                    "Received message"
                );
                tokio::spawn(async move {
                    service.process_message(&core_msg).await;
                });
            } else {
                debug!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message"
                );
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}

/// Builds the application context (built-in commands followed by `extra_commands`), starts the reply
/// relay and runs the REPL until the process is stopped.
pub async fn run_bot(
    config: TelegramConfig,
    bot_version: &str,
    extra_commands: Vec<Arc<dyn Command>>,
) -> Result<()> {
    let bot = build_bot(&config);

    let options = BuiltinOptions {
        nickname: config.commands.nickname.clone(),
        bot_version: bot_version.to_string(),
        derived_support: None,
    };
    let mut commands = builtin_commands(&options);
    commands.extend(extra_commands);

    let (outbound, events) = ChannelOutbound::channel();
    let context = AppContext::bootstrap(config.commands.clone(), Arc::new(outbound), commands)?;

    let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let relay = tokio::spawn(relay_events(events, adapter));

    info!(
        prefix = %config.commands.prefix,
        terminator = %config.commands.terminator,
        "step: starting Telegram REPL"
    );
    let result = run_repl(bot, context).await;
    relay.abort();
    result
}
