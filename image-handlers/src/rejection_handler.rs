//! Anything that is not a command, photo or image document.

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, InboundUpdate, Result};
use std::sync::Arc;
use tracing::debug;

use crate::messages::MSG_SEND_IMAGE;

/// Replies with [`MSG_SEND_IMAGE`]. Unsupported content is not an error, so nothing above debug is logged.
#[derive(Clone)]
pub struct RejectionHandler {
    bot: Arc<dyn Bot>,
}

impl RejectionHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for RejectionHandler {
    async fn handle(&self, update: &InboundUpdate) -> Result<HandlerResponse> {
        debug!(
            user_id = update.user.id,
            kind = update.kind.label(),
            "Unsupported content, asking for an image"
        );
        self.bot.reply_text(update, MSG_SEND_IMAGE).await?;
        Ok(HandlerResponse::Reply(MSG_SEND_IMAGE.to_string()))
    }
}
