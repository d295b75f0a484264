//! # relay-core
//!
//! Core types and traits for the image relay bot: [`Bot`], [`Handler`], the [`InboundUpdate`] union,
//! [`ImagePayload`], error types and tracing initialization. Transport-agnostic; used by
//! relay-telegram, dispatcher, image-handlers and inference-client.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{FetchError, InferenceError, InferenceResult, RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Command, FileRef, Handler, HandlerResponse, ImagePayload, InboundUpdate, ToInboundUpdate,
    UpdateKind, User, DEFAULT_IMAGE_MIME,
};
