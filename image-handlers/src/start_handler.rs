//! `/start` and `/help`: fixed instructional text.

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, InboundUpdate, Result};
use std::sync::Arc;
use tracing::info;

use crate::messages::MSG_START;

/// Replies with [`MSG_START`] whatever the update carries.
#[derive(Clone)]
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, update: &InboundUpdate) -> Result<HandlerResponse> {
        info!(user_id = update.user.id, chat_id = update.chat.id, "Sending start text");
        self.bot.reply_text(update, MSG_START).await?;
        Ok(HandlerResponse::Reply(MSG_START.to_string()))
    }
}
