//! Bot configuration: Telegram connection, inference endpoint, HTTP front, logging. Loaded from env.

mod bot_config;
mod error;


pub use bot_config::{BotConfig, DEFAULT_HOST, DEFAULT_LOG_FILE, DEFAULT_PORT};
pub use error::ConfigError;
