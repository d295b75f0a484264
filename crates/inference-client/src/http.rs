//! reqwest-based [`InferenceClient`]: one multipart POST per call, bounded by the client timeout.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{header, Client, Url};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

use crate::{mask_token, InferenceClient, InferenceConfig};
use relay_core::{ImagePayload, InferenceError, InferenceResult, DEFAULT_IMAGE_MIME};

/// Multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "image";
/// File name sent with the image part.
pub const UPLOAD_FILE_NAME: &str = "img.jpg";
/// Content type sent with the image part.
pub const UPLOAD_MIME: &str = "image/jpeg";

/// Max chars of an error body kept for logs.
const BODY_PREVIEW_CHARS: usize = 200;

/// Inference client over HTTP. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpInferenceClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
    bearer_token: Option<String>,
}

impl HttpInferenceClient {
    /// Builds the underlying reqwest client with the configured timeout.
    pub fn new(config: InferenceConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build inference HTTP client: {}", e))?;
        Ok(Self {
            http,
            endpoint: config.endpoint,
            timeout: config.timeout,
            bearer_token: config.bearer_token,
        })
    }

    fn build_form(image: ImagePayload) -> Result<Form, InferenceError> {
        let part = Part::bytes(image.bytes)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_MIME)
            .map_err(|e| InferenceError::Transport(e.to_string()))?;
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }

    fn classify(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout(format!("no response within {}s", self.timeout.as_secs()))
        } else {
            InferenceError::Transport(e.to_string())
        }
    }
}

/// MIME type of a successful response, if the server declared an image type.
fn response_mime(headers: &header::HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .filter(|v| v.starts_with("image/"))
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string())
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    #[instrument(skip(self, image), fields(endpoint = %self.endpoint, bytes = image.len()))]
    async fn infer(&self, image: ImagePayload) -> InferenceResult {
        let masked = self
            .bearer_token
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| "none".to_string());
        info!(token = %masked, "Inference request");

        let form = Self::build_form(image)?;
        let mut request = self.http.post(self.endpoint.clone()).multipart(form);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let started = Instant::now();
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                let err = self.classify(e);
                error!(
                    error = %err,
                    kind = err.kind(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Inference request failed"
                );
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = InferenceError::Status {
                status: status.as_u16(),
                body: preview(&body),
            };
            error!(
                status = status.as_u16(),
                error = %err,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Inference endpoint returned non-success status"
            );
            return Err(err);
        }

        let mime_type = response_mime(response.headers());
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;

        info!(
            status = status.as_u16(),
            bytes = bytes.len(),
            mime_type = %mime_type,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Inference completed"
        );

        Ok(ImagePayload::new(bytes.to_vec(), mime_type))
    }
}
