//! Inference client config: endpoint, timeout, optional bearer token.

use anyhow::Result;
use reqwest::Url;
use std::time::Duration;

/// Default request timeout for one inference call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for [`crate::HttpInferenceClient`]. Built once at startup.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub bearer_token: Option<String>,
}

impl InferenceConfig {
    /// Parses `endpoint` (must be http or https); timeout defaults to 60s, no bearer token.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| anyhow::anyhow!("invalid inference endpoint {:?}: {}", endpoint, e))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!(
                "inference endpoint must use http or https, got {:?}",
                endpoint.scheme()
            );
        }
        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bearer_token: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the bearer credential sent as `Authorization: Bearer <token>`. Empty tokens are ignored.
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token.filter(|t| !t.is_empty());
        self
    }
}
