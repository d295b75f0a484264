//! Core types: user, chat, inbound update, image payload, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod payload;
mod response;
mod update;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToInboundUpdate};
pub use payload::{ImagePayload, DEFAULT_IMAGE_MIME};
pub use response::HandlerResponse;
pub use update::{Command, FileRef, InboundUpdate, UpdateKind};
pub use user::User;
