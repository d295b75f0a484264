//! # relay-bot
//!
//! Telegram bot that forwards user photos and image documents to an inference endpoint and replies
//! with the returned image. Also serves a small local HTTP front for liveness and direct predictions.
//!
//! Assembly lives here; see `relay-core` for types, `dispatcher` for routing, `image-handlers` for
//! replies, `inference-client` for the upstream call and `relay-telegram` for the Telegram boundary.

pub mod cli;
mod components;
mod config;
mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_components, build_dispatcher, build_inference_client, RelayComponents};
pub use config::{BotConfig, ConfigError, DEFAULT_HOST, DEFAULT_LOG_FILE, DEFAULT_PORT};
pub use runner::{run_bot, run_server};
