//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "relay-bot")]
#[command(about = "Telegram bot that runs user images through an inference endpoint", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot and the local HTTP front (config from env; token can override TG_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Do not start the HTTP front on HOST:PORT.
        #[arg(long)]
        no_http: bool,
    },
    /// Run only the local HTTP front (GET /, POST /predict).
    Serve,
}
