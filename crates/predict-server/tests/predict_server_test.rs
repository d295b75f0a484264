//! Integration tests for the HTTP front: the router is served on an ephemeral port and driven with
//! reqwest; inference is a stub that counts calls.

use async_trait::async_trait;
use inference_client::{ImagePayload, InferenceClient, InferenceError, InferenceResult};
use predict_server::{router, AppState, ALIVE_TEXT};
use reqwest::multipart::{Form, Part};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct StubInference {
    result: InferenceResult,
    calls: AtomicUsize,
}

#[async_trait]
impl InferenceClient for StubInference {
    async fn infer(&self, _image: ImagePayload) -> InferenceResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn stub(result: InferenceResult) -> Arc<StubInference> {
    Arc::new(StubInference {
        result,
        calls: AtomicUsize::new(0),
    })
}

/// Serves the router on 127.0.0.1:0 and returns its base URL with the stub.
async fn spawn_server(result: InferenceResult) -> (String, Arc<StubInference>) {
    let stub = stub(result);
    let base = spawn_with_state(AppState::new(stub.clone())).await;
    (base, stub)
}

async fn spawn_with_state(state: AppState) -> String {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn image_form(field: &str) -> Form {
    let part = Part::bytes(vec![1u8; 2048])
        .file_name("photo.jpg")
        .mime_str("image/jpeg")
        .unwrap();
    Form::new().part(field.to_string(), part)
}

/// **Test: GET / answers the liveness text.**
#[tokio::test]
async fn test_root_returns_alive_text() {
    let (base, _) = spawn_server(Ok(ImagePayload::jpeg(Vec::new()))).await;

    let resp = reqwest::get(&base).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), ALIVE_TEXT);
}

/// **Test: POST /predict returns the inference bytes as image/jpeg.**
#[tokio::test]
async fn test_predict_success_returns_result_bytes() {
    let result = vec![0xFFu8; 12 * 1024];
    let (base, stub) = spawn_server(Ok(ImagePayload::jpeg(result.clone()))).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .multipart(image_form("image"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "image/jpeg");
    assert_eq!(resp.bytes().await.unwrap().to_vec(), result);
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

/// **Test: POST /predict without an `image` field is a 400 and never reaches inference.**
#[tokio::test]
async fn test_predict_without_image_field() {
    let (base, stub) = spawn_server(Ok(ImagePayload::jpeg(b"x".to_vec()))).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .multipart(image_form("file"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "no image" }));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

/// **Test: A text field named `image` is not an upload.**
///
/// **Expected:** 400 `no image`, the same as a missing field; inference is never called.
#[tokio::test]
async fn test_predict_text_image_field_counts_as_missing() {
    let (base, stub) = spawn_server(Ok(ImagePayload::jpeg(b"x".to_vec()))).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .multipart(Form::new().text("image", "not a file"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "no image" }));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

/// **Test: An upload over the body ceiling is 413, not a malformed-body 400.**
///
/// **Setup:** Ceiling lowered to 1 KiB; the form carries a 4 KiB image.
#[tokio::test]
async fn test_predict_oversized_upload_is_payload_too_large() {
    let stub = stub(Ok(ImagePayload::jpeg(b"x".to_vec())));
    let base = spawn_with_state(AppState::new(stub.clone()).with_max_upload_bytes(1024)).await;

    let part = Part::bytes(vec![1u8; 4096])
        .file_name("photo.jpg")
        .mime_str("image/jpeg")
        .unwrap();
    let resp = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .multipart(Form::new().part("image", part))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 413);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "image too large" }));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

/// **Test: A non-multipart body is a 400 with a JSON error.**
#[tokio::test]
async fn test_predict_rejects_non_multipart_body() {
    let (base, stub) = spawn_server(Ok(ImagePayload::jpeg(b"x".to_vec()))).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .header("content-type", "application/json")
        .body(r#"{"image":"base64?"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "invalid multipart body" }));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

/// **Test: Inference failure maps to 502 without leaking the upstream status or body.**
#[tokio::test]
async fn test_predict_inference_failure_is_bad_gateway() {
    let (base, _) = spawn_server(Err(InferenceError::Status {
        status: 500,
        body: "CUDA out of memory".to_string(),
    }))
    .await;

    let resp = reqwest::Client::new()
        .post(format!("{}/predict", base))
        .multipart(image_form("image"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 502);
    let body = resp.text().await.unwrap();
    assert_eq!(body, r#"{"error":"inference failed"}"#);
}
