//! Bot abstraction for replying to users and fetching their files.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests substitute a
//! recording mock.

use async_trait::async_trait;

use crate::error::{FetchError, Result};
use crate::types::{Chat, FileRef, ImagePayload, InboundUpdate};

/// Abstraction over the chat platform. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends an image to the given chat.
    async fn send_photo(&self, chat: &Chat, image: ImagePayload) -> Result<()>;

    /// Resolves a platform file reference to its raw bytes.
    async fn download_file(&self, file: &FileRef) -> std::result::Result<Vec<u8>, FetchError>;

    /// Replies with text in the chat the update came from.
    async fn reply_text(&self, update: &InboundUpdate, text: &str) -> Result<()> {
        self.send_message(&update.chat, text).await
    }

    /// Replies with an image in the chat the update came from.
    async fn reply_photo(&self, update: &InboundUpdate, image: ImagePayload) -> Result<()> {
        self.send_photo(&update.chat, image).await
    }
}
