//! Router-level tests driving the full HTTP surface in-process.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::Engine;
use serde_json::{json, Value};
use tower::ServiceExt;

use trimetric_core::render::{Figure, ImageArtifact, PngRenderer, SceneRenderer};
use trimetric_core::scene::SceneDescription;
use trimetric_core::{ChartError, Result};
use trimetric_gateway::{app_state::AppState, config::GatewayConfig, router::build_router};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Wraps the real renderer and counts calls.
struct CountingRenderer {
    inner: PngRenderer,
    calls: AtomicUsize,
}

impl SceneRenderer for CountingRenderer {
    fn render(&self, scene: &SceneDescription) -> Result<ImageArtifact> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.render(scene)
    }
}

struct BrokenRenderer;

impl SceneRenderer for BrokenRenderer {
    fn render(&self, _scene: &SceneDescription) -> Result<ImageArtifact> {
        Err(ChartError::Render("failed to allocate pixmap".into()))
    }
}

fn app() -> (Router, Arc<CountingRenderer>, AppState) {
    let renderer = Arc::new(CountingRenderer {
        inner: PngRenderer::new(Figure {
            dpi: 20,
            ..Figure::default()
        }),
        calls: AtomicUsize::new(0),
    });
    let state = AppState::with_renderer(GatewayConfig::default(), renderer.clone());
    (build_router(state.clone()), renderer, state)
}

async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn valid_metrics_return_scores_and_png() {
    let (app, renderer, _) = app();
    let body = json!({"performance": 10, "people": 5, "personal": 8}).to_string();
    let (status, v) = post_json(app, "/metrics/", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "success");
    assert_eq!(v["scores"], json!({"performance": 10, "people": 5, "personal": 8}));

    let image = v["image"].as_str().unwrap();
    assert!(!image.is_empty());
    let png = base64::engine::general_purpose::STANDARD.decode(image).unwrap();
    assert!(png.starts_with(PNG_SIGNATURE));
    assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn route_without_trailing_slash_is_served() {
    let (app, _, _) = app();
    let body = json!({"performance": 0, "people": 0, "personal": 0}).to_string();
    let (status, v) = post_json(app, "/metrics", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "success");
}

#[tokio::test]
async fn negative_value_is_rejected_before_rendering() {
    let (app, renderer, state) = app();
    let body = json!({"performance": -1, "people": 5, "personal": 8}).to_string();
    let (status, v) = post_json(app, "/metrics/", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v.get("image").is_none());
    assert_eq!(v["detail"][0]["loc"], json!(["body", "performance"]));
    assert_eq!(v["detail"][0]["type"], "greater_than_equal");
    assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        state
            .metrics()
            .validation_failures
            .get(&[("field", "performance"), ("kind", "greater_than_equal")]),
        1
    );
}

#[tokio::test]
async fn missing_and_mistyped_fields_are_all_reported() {
    let (app, renderer, _) = app();
    let body = json!({"performance": "high", "people": 5}).to_string();
    let (status, v) = post_json(app, "/metrics/", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = v["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 2);
    assert_eq!(detail[0]["type"], "int_type");
    assert_eq!(detail[1]["loc"], json!(["body", "personal"]));
    assert_eq!(detail[1]["type"], "missing");
    assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let (app, _, _) = app();
    let (status, v) = post_json(app, "/metrics/", "{\"performance\": ").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (app, renderer, _) = app();
    let padding = "x".repeat(8192);
    let body = json!({"performance": 1, "people": 1, "personal": 1, "pad": padding}).to_string();
    let (status, v) = post_json(app, "/metrics/", body).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(v["error"], "PAYLOAD_TOO_LARGE");
    assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn render_failure_is_an_internal_error() {
    let state = AppState::with_renderer(GatewayConfig::default(), Arc::new(BrokenRenderer));
    let body = json!({"performance": 1, "people": 2, "personal": 3}).to_string();
    let (status, v) = post_json(build_router(state.clone()), "/metrics/", body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(v["error"], "INTERNAL");
    assert!(v.get("image").is_none());
    assert_eq!(state.metrics().render_failures.get(&[]), 1);
    assert_eq!(state.metrics().renders_in_flight.get(), 0);
}

#[tokio::test]
async fn health_is_always_healthy() {
    let (app, _, _) = app();
    for _ in 0..2 {
        let (status, body) = get(app.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"status": "healthy"}));
    }
}

#[tokio::test]
async fn ops_metrics_count_requests() {
    let (app, _, _) = app();
    let body = json!({"performance": 3, "people": 3, "personal": 3}).to_string();
    let (status, _) = post_json(app.clone(), "/metrics/", body).await;
    assert_eq!(status, StatusCode::OK);

    let (status, text) = get(app, "/ops/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains(r#"trimetric_requests_total{route="/metrics/",status="200"} 1"#));
    assert!(text.contains("trimetric_render_duration_micros_count 1"));
    assert!(text.contains("trimetric_renders_in_flight 0"));
}
