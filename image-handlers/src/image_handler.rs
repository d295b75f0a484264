//! Image handler: fetch the user's image, run inference, reply with the result.

use async_trait::async_trait;
use inference_client::InferenceClient;
use relay_core::{
    Bot, Handler, HandlerResponse, ImagePayload, InboundUpdate, Result, UpdateKind,
    DEFAULT_IMAGE_MIME,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::messages::{MSG_INFERENCE_FAILED, MSG_SEND_IMAGE};

/// Handles photos and image documents.
///
/// At most one download and one inference call per update; no retries. Fetch and inference
/// failures are logged with their detail and answered with [`MSG_INFERENCE_FAILED`].
#[derive(Clone)]
pub struct ImageHandler {
    bot: Arc<dyn Bot>,
    inference: Arc<dyn InferenceClient>,
}

impl ImageHandler {
    pub fn new(bot: Arc<dyn Bot>, inference: Arc<dyn InferenceClient>) -> Self {
        Self { bot, inference }
    }

    /// MIME hint for the downloaded bytes: the document's declared type, else JPEG (Telegram photos).
    fn source_mime(update: &InboundUpdate) -> String {
        match &update.kind {
            UpdateKind::ImageDocument {
                mime_type: Some(m), ..
            } => m.clone(),
            _ => DEFAULT_IMAGE_MIME.to_string(),
        }
    }

    async fn reply_text(&self, update: &InboundUpdate, text: &str) -> Result<HandlerResponse> {
        self.bot.reply_text(update, text).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }
}

#[async_trait]
impl Handler for ImageHandler {
    #[instrument(
        skip(self, update),
        fields(user_id = update.user.id, chat_id = update.chat.id, update_id = %update.id)
    )]
    async fn handle(&self, update: &InboundUpdate) -> Result<HandlerResponse> {
        let Some(file) = update.image_file() else {
            debug!(kind = update.kind.label(), "No image to forward, asking for an image");
            return self.reply_text(update, MSG_SEND_IMAGE).await;
        };

        let bytes = match self.bot.download_file(file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, file_id = %file.file_id, "Failed to fetch file from platform");
                return self.reply_text(update, MSG_INFERENCE_FAILED).await;
            }
        };
        info!(file_id = %file.file_id, bytes = bytes.len(), "Fetched image, running inference");

        let payload = ImagePayload::new(bytes, Self::source_mime(update));
        let result = match self.inference.infer(payload).await {
            Ok(result) => result,
            Err(e) => {
                error!(
                    error = %e,
                    kind = e.kind(),
                    status = ?e.status(),
                    "Inference failed"
                );
                return self.reply_text(update, MSG_INFERENCE_FAILED).await;
            }
        };

        let size = result.len();
        if let Err(e) = self.bot.reply_photo(update, result).await {
            error!(error = %e, bytes = size, "Failed to send result photo");
            return self.reply_text(update, MSG_INFERENCE_FAILED).await;
        }

        info!(bytes = size, "Result image sent");
        Ok(HandlerResponse::Photo(size))
    }
}
