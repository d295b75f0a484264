//! Process entry points: the bot (optionally with the HTTP front) and the HTTP front alone.

use anyhow::Result;
use inference_client::mask_token;
use relay_core::init_tracing;
use relay_telegram::run_repl;
use tracing::{error, info, instrument};

use super::components::{build_components, build_inference_client};
use super::config::BotConfig;

/// Main entry: init logging, build components, then poll Telegram. When `serve_http` is set the
/// HTTP front runs alongside; whichever stops first ends the process.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, serve_http: bool) -> Result<()> {
    let bot_token = config.bot_token()?.to_string();
    init_tracing(&config.log_file)?;

    info!(
        token = %mask_token(&bot_token),
        inference_url = %config.inference_url,
        telegram_api_url = ?config.telegram_api_url(),
        http_front = serve_http,
        "Initializing bot"
    );

    let components = build_components(&config, &bot_token)?;
    let repl = run_repl(
        components.teloxide_bot,
        components.dispatcher,
        components.bot_username,
    );

    info!("Bot started successfully");

    if !serve_http {
        return repl.await;
    }

    let server = predict_server::serve(config.listen_addr(), components.inference);
    tokio::select! {
        res = repl => {
            info!("Bot polling stopped");
            res
        }
        res = server => {
            if let Err(ref e) = res {
                error!(error = %e, addr = %config.listen_addr(), "HTTP front stopped");
            }
            res
        }
    }
}

/// Runs only the HTTP front. No Telegram token is needed.
#[instrument(skip(config))]
pub async fn run_server(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;
    info!(inference_url = %config.inference_url, "Initializing HTTP front");

    let inference = build_inference_client(&config)?;
    predict_server::serve(config.listen_addr(), inference).await
}
