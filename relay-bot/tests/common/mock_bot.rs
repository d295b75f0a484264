//! Mock implementation of [`relay_core::Bot`] for integration tests.
//!
//! Serves canned file bytes for `download_file` and forwards every reply as a [`ReplyRecord`] so
//! tests can assert on what the user would have received without hitting Telegram.

use async_trait::async_trait;
use relay_core::{Bot, Chat, FetchError, FileRef, ImagePayload, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

/// One reply the bot would have sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyRecord {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, bytes: Vec<u8> },
}

pub struct MockBot {
    files: HashMap<String, Vec<u8>>,
    reply_tx: mpsc::UnboundedSender<ReplyRecord>,
}

impl MockBot {
    /// Creates a MockBot serving `files` (file_id → bytes) and returns the receiver for replies.
    pub fn with_files(
        files: &[(&str, Vec<u8>)],
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<ReplyRecord>) {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        let files = files
            .iter()
            .map(|(id, bytes)| (id.to_string(), bytes.clone()))
            .collect();
        (Arc::new(Self { files, reply_tx }), reply_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.reply_tx.send(ReplyRecord::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, image: ImagePayload) -> Result<()> {
        let _ = self.reply_tx.send(ReplyRecord::Photo {
            chat_id: chat.id,
            bytes: image.bytes,
        });
        Ok(())
    }

    async fn download_file(&self, file: &FileRef) -> std::result::Result<Vec<u8>, FetchError> {
        self.files
            .get(&file.file_id)
            .cloned()
            .ok_or_else(|| FetchError::Lookup(format!("file {} not found", file.file_id)))
    }
}
