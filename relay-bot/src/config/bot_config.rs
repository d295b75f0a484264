//! BotConfig: every setting the process needs, read once at startup and never changed.

use inference_client::{InferenceConfig, DEFAULT_TIMEOUT_SECS};
use reqwest::Url;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::ConfigError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

/// Bot config. Use [`BotConfig::from_env`] in the binary; tests use [`BotConfig::from_lookup`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TG_TOKEN or BOT_TOKEN, or the `--token` flag. Only the bot runner needs it.
    bot_token: Option<String>,
    /// HF_URL or INFERENCE_URL
    pub inference_url: Url,
    /// HF_TOKEN
    pub inference_token: Option<String>,
    /// INFERENCE_TIMEOUT_SECS
    pub inference_timeout: Duration,
    /// HOST
    pub host: IpAddr,
    /// PORT
    pub port: u16,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<Url>,
    /// LOG_FILE
    pub log_file: String,
}

/// First non-empty value among `names`.
fn first_set<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn parse_http_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        var,
        reason: format!("{} ({:?})", e, raw),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            var,
            reason: format!("expected an http(s) URL, got scheme {:?}", url.scheme()),
        });
    }
    Ok(url)
}

impl BotConfig {
    /// Loads from process environment. `token` overrides TG_TOKEN / BOT_TOKEN if provided.
    /// Call `dotenvy::dotenv()` first so `.env` values are visible.
    pub fn from_env(token: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(token, |name| env::var(name).ok())
    }

    /// Loads from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(token: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| first_set(&lookup, &["TG_TOKEN", "BOT_TOKEN"]));

        let inference_url = first_set(&lookup, &["HF_URL", "INFERENCE_URL"])
            .ok_or(ConfigError::Missing("HF_URL"))?;
        let inference_url = parse_http_url("HF_URL", &inference_url)?;

        let inference_token = first_set(&lookup, &["HF_TOKEN"]);

        let inference_timeout = match first_set(&lookup, &["INFERENCE_TIMEOUT_SECS"]) {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "INFERENCE_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got {:?}", raw),
                    })
                }
            },
        };

        let host = match first_set(&lookup, &["HOST"]) {
            None => DEFAULT_HOST,
            Some(raw) => raw.parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                var: "HOST",
                reason: format!("{} ({:?})", e, raw),
            })?,
        };

        let port = match first_set(&lookup, &["PORT"]) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: format!("{} ({:?})", e, raw),
            })?,
        };

        let telegram_api_url = first_set(&lookup, &["TELEGRAM_API_URL", "TELOXIDE_API_URL"])
            .map(|raw| parse_http_url("TELEGRAM_API_URL", &raw))
            .transpose()?;

        let log_file =
            first_set(&lookup, &["LOG_FILE"]).unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            inference_url,
            inference_token,
            inference_timeout,
            host,
            port,
            telegram_api_url,
            log_file,
        })
    }

    /// The Telegram token. Missing is a fatal error for `run`, but not for `serve`.
    pub fn bot_token(&self) -> Result<&str, ConfigError> {
        self.bot_token
            .as_deref()
            .ok_or(ConfigError::Missing("TG_TOKEN"))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram_api_url.as_ref().map(Url::as_str)
    }

    /// Settings for the inference client.
    pub fn inference_config(&self) -> anyhow::Result<InferenceConfig> {
        Ok(InferenceConfig::new(self.inference_url.as_str())?
            .with_timeout(self.inference_timeout)
            .with_bearer_token(self.inference_token.clone()))
    }
}
