//! REPL runner: converts teloxide messages to [`InboundUpdate`]s and hands them to the dispatcher.
//! Calls get_me() first so commands addressed as `/start@ThisBot` are recognised.

use anyhow::Result;
use dispatcher::Dispatcher;
use relay_core::ToInboundUpdate;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot and dispatcher.
/// Each update is dispatched in its own task so a slow inference call does not hold up the others.
#[instrument(skip(bot, dispatcher, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    dispatcher: Dispatcher,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed, commands with @mention will not match"),
    }

    let dispatcher = Arc::new(dispatcher);
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let dispatcher = dispatcher.clone();
        let bot_username = bot_username.clone();

        async move {
            let username = bot_username.read().await.clone();
            let update = TelegramMessageWrapper::new(&msg, username.as_deref()).to_update();
            info!(
                user_id = update.user.id,
                chat_id = update.chat.id,
                kind = update.kind.label(),
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = dispatcher.dispatch(&update).await {
                    error!(
                        error = %e,
                        user_id = update.user.id,
                        chat_id = update.chat.id,
                        "Failed to deliver reply"
                    );
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
