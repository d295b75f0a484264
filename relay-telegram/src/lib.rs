//! # relay-telegram
//!
//! Telegram boundary: converts teloxide messages into [`relay_core::InboundUpdate`] once, implements
//! [`relay_core::Bot`] over teloxide, and runs the long-polling REPL that feeds the dispatcher.
//! No inference or handler logic lives here.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramCommand, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::run_repl;
