//! Test doubles shared by the handler tests: a recording [`Bot`] and a canned [`InferenceClient`].

#![allow(dead_code)]

use async_trait::async_trait;
use inference_client::InferenceClient;
use relay_core::{
    Bot, Chat, FetchError, FileRef, ImagePayload, InboundUpdate, InferenceResult, RelayError,
    Result, UpdateKind, User,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One reply recorded by [`MockBot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, bytes: Vec<u8> },
}

/// Bot that serves files from a map and records every reply instead of calling Telegram.
#[derive(Default)]
pub struct MockBot {
    files: HashMap<String, Vec<u8>>,
    fail_photo: bool,
    sent: Mutex<Vec<Sent>>,
    downloads: Mutex<Vec<String>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `file_id` downloadable with the given bytes. Unknown ids fail with `FetchError::Lookup`.
    pub fn with_file(mut self, file_id: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(file_id.to_string(), bytes);
        self
    }

    /// Makes every `send_photo` fail as if Telegram rejected the upload.
    pub fn failing_photos(mut self) -> Self {
        self.fail_photo = true;
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, image: ImagePayload) -> Result<()> {
        if self.fail_photo {
            return Err(RelayError::Bot("Bad Request: IMAGE_PROCESS_FAILED".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id: chat.id,
            bytes: image.bytes,
        });
        Ok(())
    }

    async fn download_file(&self, file: &FileRef) -> std::result::Result<Vec<u8>, FetchError> {
        self.downloads.lock().unwrap().push(file.file_id.clone());
        self.files
            .get(&file.file_id)
            .cloned()
            .ok_or_else(|| FetchError::Lookup(format!("Bad Request: invalid file_id {}", file.file_id)))
    }
}

/// Inference client returning a fixed result and counting calls.
pub struct StubInference {
    result: InferenceResult,
    calls: AtomicUsize,
    received: Mutex<Vec<ImagePayload>>,
}

impl StubInference {
    pub fn new(result: InferenceResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<ImagePayload> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for StubInference {
    async fn infer(&self, image: ImagePayload) -> InferenceResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(image);
        self.result.clone()
    }
}

pub const CHAT_ID: i64 = 4242;

pub fn update(kind: UpdateKind) -> InboundUpdate {
    InboundUpdate::new(
        "77",
        User {
            id: 1001,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        kind,
    )
}

pub fn text(text: &str) -> Sent {
    Sent::Text {
        chat_id: CHAT_ID,
        text: text.to_string(),
    }
}
