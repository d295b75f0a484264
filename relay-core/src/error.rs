//! Error types for the relay core.
//!
//! [`RelayError`] is the top-level error. [`FetchError`] and [`InferenceError`] are the two
//! per-update failure kinds the image handler matches on; neither is ever shown to the user.

use thiserror::Error;

use crate::types::ImagePayload;

/// Top-level error for the relay: reply delivery, file fetch or inference.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),
}

/// The platform could not serve the referenced file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Resolving the file reference (e.g. Telegram `getFile`) failed.
    #[error("file lookup failed: {0}")]
    Lookup(String),

    /// The file was resolved but downloading its bytes failed.
    #[error("file download failed: {0}")]
    Download(String),
}

/// Failure of a single inference call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// The endpoint answered with a non-2xx status. `body` is a truncated preview for logs.
    #[error("inference endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request did not complete within the client timeout.
    #[error("inference request timed out: {0}")]
    Timeout(String),

    /// The request could not be sent or the response could not be read.
    #[error("inference transport error: {0}")]
    Transport(String),
}

impl InferenceError {
    /// HTTP status of a `Status` failure; None for timeouts and transport errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            InferenceError::Status { status, .. } => Some(*status),
            InferenceError::Timeout(_) | InferenceError::Transport(_) => None,
        }
    }

    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            InferenceError::Status { .. } => "status",
            InferenceError::Timeout(_) => "timeout",
            InferenceError::Transport(_) => "transport",
        }
    }
}

/// Outcome of one inference call: the processed image or a typed failure.
pub type InferenceResult = std::result::Result<ImagePayload, InferenceError>;

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
