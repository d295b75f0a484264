//! relay-bot binary: `run` polls Telegram (and serves the HTTP front unless `--no-http`), `serve`
//! runs only the HTTP front.

use anyhow::Result;
use clap::Parser;
use relay_bot::{run_bot, run_server, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, no_http } => {
            let config = BotConfig::from_env(token)?;
            run_bot(config, !no_http).await
        }
        Commands::Serve => {
            let config = BotConfig::from_env(None)?;
            run_server(config).await
        }
    }
}
