//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code talks to Telegram; tests
//! substitute a recording mock.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Chat, FetchError, FileRef, ImagePayload, RelayError, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile};
use tracing::debug;

/// Builds the teloxide Bot, pointing it at a custom Bot API server when `api_url` is set.
/// The URL is validated when the config is loaded.
pub fn build_teloxide_bot(token: &str, api_url: Option<&reqwest::Url>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url) => bot.set_api_url(url.clone()),
        None => bot,
    }
}

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, image: ImagePayload) -> Result<()> {
        let file_name = image.file_name();
        let photo = InputFile::memory(image.bytes).file_name(file_name);
        self.bot
            .send_photo(ChatId(chat.id), photo)
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_file(&self, file: &FileRef) -> std::result::Result<Vec<u8>, FetchError> {
        let meta = self
            .bot
            .get_file(FileId(file.file_id.clone()))
            .await
            .map_err(|e| FetchError::Lookup(e.to_string()))?;
        debug!(file_id = %file.file_id, path = %meta.path, "Resolved file path");

        let mut buf = Vec::new();
        self.bot
            .download_file(&meta.path, &mut buf)
            .await
            .map_err(|e| FetchError::Download(e.to_string()))?;
        Ok(buf)
    }
}
