//! # image-handlers
//!
//! The three reply handlers: [`StartHandler`] for `/start` and `/help`, [`ImageHandler`] for photos
//! and image documents, [`RejectionHandler`] for everything else. Each sends exactly one reply.

mod image_handler;
mod messages;
mod rejection_handler;
mod start_handler;

pub use image_handler::ImageHandler;
pub use messages::{MSG_INFERENCE_FAILED, MSG_SEND_IMAGE, MSG_START};
pub use rejection_handler::RejectionHandler;
pub use start_handler::StartHandler;
