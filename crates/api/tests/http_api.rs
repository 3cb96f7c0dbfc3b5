//! Router-level tests for the pass API.
//!
//! Drives the full axum application in-process with `tower::ServiceExt`,
//! backed by the in-memory store and a stub document renderer, so the HTTP
//! contract is exercised without `PostgreSQL` or font assets.

#![allow(clippy::unwrap_used)]

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use gatepass_api::config::ApiConfig;
use gatepass_api::db::PassStore;
use gatepass_api::db::memory::InMemoryPassStore;
use gatepass_api::services::pdf::{DocumentRenderer, PassLayout, RenderError};
use gatepass_api::state::AppState;

/// Stub PDF bytes returned by the test renderer.
const STUB_PDF: &[u8] = b"%PDF-1.7 stub";

struct StubRenderer;

impl DocumentRenderer for StubRenderer {
    fn render(&self, _layout: &PassLayout) -> Result<Vec<u8>, RenderError> {
        Ok(STUB_PDF.to_vec())
    }
}

fn test_config() -> ApiConfig {
    ApiConfig {
        database_url: SecretString::from("postgres://localhost/gatepass_test"),
        host: "127.0.0.1".parse::<IpAddr>().unwrap(),
        port: 0,
        font_dir: PathBuf::from("assets/fonts"),
        font_family: "LiberationSans".to_string(),
        sentry_dsn: None,
    }
}

fn app() -> Router {
    let store: Arc<dyn PassStore> = Arc::new(InMemoryPassStore::new());
    let state = AppState::new(test_config(), store, Arc::new(StubRenderer)).unwrap();
    gatepass_api::app(state)
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_pass_returns_pdf_attachment() {
    let app = app();

    let response = app
        .oneshot(json_post(
            "/generate_pass",
            json!({"name": "Alice", "phone": "555-1234"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"festival_pass.pdf\""
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], STUB_PDF);
}

#[tokio::test]
async fn test_generate_pass_missing_fields_is_400() {
    let app = app();

    let response = app
        .oneshot(json_post("/generate_pass", json!({"name": "Alice"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Missing required form fields"}));
}

#[tokio::test]
async fn test_generate_pass_empty_phone_is_400() {
    let app = app();

    let response = app
        .oneshot(json_post(
            "/generate_pass",
            json!({"name": "Alice", "phone": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_issue_then_verify_roundtrip() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_post(
            "/generate_pass",
            json!({"name": "Alice", "phone": "555-1234", "picture": null}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_post("/verify_pass", json!({"code": "555-1234"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "valid");
    assert_eq!(body["details"]["name"], "Alice");
    assert_eq!(body["details"]["identifier"], "555-1234");
    assert_eq!(body["details"]["barcode_data"], "555-1234");
}

#[tokio::test]
async fn test_reissue_overwrites_record() {
    let app = app();

    for name in ["Alice", "Bob"] {
        let response = app
            .clone()
            .oneshot(json_post(
                "/generate_pass",
                json!({"name": name, "phone": "555-1234"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(json_post("/verify_pass", json!({"code": "555-1234"})))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["details"]["name"], "Bob");
}

#[tokio::test]
async fn test_verify_unknown_code_is_404() {
    let app = app();

    let response = app
        .oneshot(json_post(
            "/verify_pass",
            json!({"code": "nonexistent-code"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"status": "invalid", "message": "Pass not found"})
    );
}

#[tokio::test]
async fn test_verify_missing_code_is_400() {
    let app = app();

    let response = app
        .oneshot(json_post("/verify_pass", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Missing code field"}));
}

#[tokio::test]
async fn test_unreachable_picture_still_issues() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_post(
            "/generate_pass",
            json!({
                "name": "Alice",
                "phone": "555-1234",
                "picture": "http://127.0.0.1:9/alice.jpg"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The stored record keeps the submitted URL regardless of fetch outcome
    let response = app
        .oneshot(json_post("/verify_pass", json!({"code": "555-1234"})))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["details"]["picture_url"], "http://127.0.0.1:9/alice.jpg");
}

#[tokio::test]
async fn test_health() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/generate_pass")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
