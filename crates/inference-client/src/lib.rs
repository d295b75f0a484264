//! # Inference client
//!
//! Uploads one image to the configured inference endpoint as `multipart/form-data` (single field
//! `image`) and returns the processed image bytes.
//!
//! [`InferenceClient`] is the seam used by the image handler and the local HTTP front;
//! [`HttpInferenceClient`] is the only real implementation. Failures are typed: a non-2xx status is
//! [`InferenceError::Status`], a timeout is [`InferenceError::Timeout`], anything else that stops
//! the request from completing is [`InferenceError::Transport`]. The client never retries.

use async_trait::async_trait;

mod config;
mod http;

pub use config::{InferenceConfig, DEFAULT_TIMEOUT_SECS};
pub use http::{HttpInferenceClient, UPLOAD_FIELD, UPLOAD_FILE_NAME, UPLOAD_MIME};
pub use relay_core::{ImagePayload, InferenceError, InferenceResult};

/// Performs one inference call per invocation.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `image` to the endpoint. Returns the response body on 2xx, a typed failure otherwise.
    async fn infer(&self, image: ImagePayload) -> InferenceResult;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
