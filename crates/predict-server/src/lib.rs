//! # predict-server
//!
//! Local HTTP front running next to the bot: `GET /` answers a liveness text, `POST /predict`
//! forwards one multipart `image` field through the shared [`InferenceClient`] and returns the result.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use inference_client::InferenceClient;
use relay_core::{ImagePayload, DEFAULT_IMAGE_MIME};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Liveness text served on `GET /`.
pub const ALIVE_TEXT: &str = "✅ relay bot alive";

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

/// Upload ceiling, matching what the Bot API lets a bot download.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared state for the HTTP front.
#[derive(Clone)]
pub struct AppState {
    inference: Arc<dyn InferenceClient>,
    max_upload_bytes: usize,
}

impl AppState {
    pub fn new(inference: Arc<dyn InferenceClient>) -> Self {
        Self {
            inference,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }

    /// Overrides the request body ceiling for `/predict`.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);
    Router::new()
        .route("/", get(alive_handler))
        .route("/predict", post(predict_handler))
        .layer(body_limit)
        .with_state(state)
}

/// Binds `addr` and serves until the listener fails.
pub async fn serve(addr: SocketAddr, inference: Arc<dyn InferenceClient>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Starting HTTP front");
    info!("  GET  /         - liveness");
    info!("  POST /predict  - multipart field `image` -> result image");

    axum::serve(listener, router(AppState::new(inference))).await?;
    Ok(())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// GET /: liveness text.
async fn alive_handler() -> &'static str {
    ALIVE_TEXT
}

/// Reads fields until the `image` file part. `Ok(None)` when the form has no such part; a plain
/// text field named `image` does not count.
async fn read_image_field(
    multipart: &mut Multipart,
) -> Result<Option<ImagePayload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) || field.file_name().is_none() {
            continue;
        }
        let mime_type = field
            .content_type()
            .filter(|m| m.to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(DEFAULT_IMAGE_MIME)
            .to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(ImagePayload::new(bytes.to_vec(), mime_type)));
    }
    Ok(None)
}

/// POST /predict: forwards the `image` field for inference and returns the result as JPEG.
async fn predict_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, "Rejected /predict request without a multipart body");
            return error_response(StatusCode::BAD_REQUEST, "invalid multipart body");
        }
    };

    let image = match read_image_field(&mut multipart).await {
        Ok(Some(image)) => image,
        Ok(None) => return error_response(StatusCode::BAD_REQUEST, "no image"),
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!(
                error = %e,
                limit = state.max_upload_bytes,
                "Rejected oversized /predict upload"
            );
            return error_response(StatusCode::PAYLOAD_TOO_LARGE, "image too large");
        }
        Err(e) => {
            warn!(error = %e, "Failed to read /predict multipart body");
            return error_response(StatusCode::BAD_REQUEST, "invalid multipart body");
        }
    };

    let input_bytes = image.len();
    match state.inference.infer(image).await {
        Ok(result) => {
            info!(input_bytes, output_bytes = result.len(), "Served /predict");
            ([(header::CONTENT_TYPE, DEFAULT_IMAGE_MIME)], result.bytes).into_response()
        }
        Err(e) => {
            error!(
                error = %e,
                kind = e.kind(),
                status = ?e.status(),
                "Inference failed for /predict"
            );
            error_response(StatusCode::BAD_GATEWAY, "inference failed")
        }
    }
}
