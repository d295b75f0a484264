//! Component factory: builds the inference client, handlers and dispatcher from config. Isolates
//! assembly from the runner so tests can wire the same pieces around a mock bot.

use anyhow::Result;
use dispatcher::Dispatcher;
use image_handlers::{ImageHandler, RejectionHandler, StartHandler};
use inference_client::{mask_token, HttpInferenceClient, InferenceClient};
use relay_core::Bot;
use relay_telegram::{build_teloxide_bot, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::BotConfig;

/// Everything the runner needs to start polling and serving.
pub struct RelayComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    pub inference: Arc<dyn InferenceClient>,
    pub dispatcher: Dispatcher,
}

/// Builds the single HTTP inference client shared by the bot and the HTTP front.
#[instrument(skip(config))]
pub fn build_inference_client(config: &BotConfig) -> Result<Arc<dyn InferenceClient>> {
    let inference_config = config.inference_config()?;
    info!(
        endpoint = %inference_config.endpoint,
        timeout_secs = inference_config.timeout.as_secs(),
        token = %inference_config.bearer_token.as_deref().map(mask_token).unwrap_or_default(),
        "Inference client configured"
    );
    Ok(Arc::new(HttpInferenceClient::new(inference_config)?))
}

/// Wires the three handlers around `bot` and `inference`.
pub fn build_dispatcher(bot: Arc<dyn Bot>, inference: Arc<dyn InferenceClient>) -> Dispatcher {
    Dispatcher::new(
        Arc::new(StartHandler::new(bot.clone())),
        Arc::new(ImageHandler::new(bot.clone(), inference)),
        Arc::new(RejectionHandler::new(bot)),
    )
}

/// Builds the teloxide bot, its [`Bot`] adapter and the dispatcher.
#[instrument(skip(config, bot_token))]
pub fn build_components(config: &BotConfig, bot_token: &str) -> Result<RelayComponents> {
    let teloxide_bot = build_teloxide_bot(bot_token, config.telegram_api_url.as_ref());
    let bot_adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let inference = build_inference_client(config)?;
    let dispatcher = build_dispatcher(bot_adapter, inference.clone());

    Ok(RelayComponents {
        teloxide_bot,
        bot_username: Arc::new(tokio::sync::RwLock::new(None)),
        inference,
        dispatcher,
    })
}
