// Router tests: drive the Axum app in-process with tower's oneshot.

#![cfg(feature = "web")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tower::ServiceExt;

use newsprobe::config::{Config, EmbedderBackend};
use newsprobe::inference::{Predictor, EMPTY_INPUT_WARNING};
use newsprobe::web::{build_router, AppState};

use common::{FAKE_TEXT, REAL_TEXT};

const FAKE_HTML: &str = "The news is <strong>FAKE</strong>.";
const REAL_HTML: &str = "The news is <strong>REAL</strong>.";

fn test_config() -> Config {
    Config {
        embedder_backend: EmbedderBackend::WordVectors,
        model_dir: std::env::temp_dir(),
        word_vectors_path: None,
        classifier_path: std::env::temp_dir().join("unused.json"),
        bind: "127.0.0.1".to_string(),
        port: 0,
    }
}

fn app_with(predictor: Predictor) -> Router {
    build_router(AppState::new(Arc::new(predictor), Arc::new(test_config())))
}

fn app() -> Router {
    app_with(common::predictor())
}

/// application/x-www-form-urlencoded body for the page form.
fn form_body(text: &str) -> String {
    format!("news_text={}", utf8_percent_encode(text, NON_ALPHANUMERIC))
}

async fn submit(app: Router, text: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(text)))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_json(app: Router, json: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn blank_page_shows_warning_and_no_verdict() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, html) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(EMPTY_INPUT_WARNING));
    assert!(!html.contains(FAKE_HTML));
    assert!(!html.contains(REAL_HTML));
}

#[tokio::test]
async fn submitting_empty_text_shows_only_the_warning() {
    let (status, html) = submit(app(), "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(EMPTY_INPUT_WARNING));
    assert!(!html.contains(FAKE_HTML));
    assert!(!html.contains(REAL_HTML));
}

#[tokio::test]
async fn submitting_whitespace_shows_only_the_warning() {
    let (_, html) = submit(app(), "   \n  ").await;
    assert!(html.contains(EMPTY_INPUT_WARNING));
    assert!(!html.contains(FAKE_HTML));
    assert!(!html.contains(REAL_HTML));
}

#[tokio::test]
async fn sensational_claim_renders_fake_only() {
    let (status, html) = submit(app(), FAKE_TEXT).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(FAKE_HTML));
    assert!(!html.contains(REAL_HTML));
    assert!(html.contains("notice error"));
}

#[tokio::test]
async fn finance_report_renders_real_only() {
    let (status, html) = submit(app(), REAL_TEXT).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(REAL_HTML));
    assert!(!html.contains(FAKE_HTML));
    assert!(html.contains("notice success"));
    assert!(!html.contains(EMPTY_INPUT_WARNING));
}

#[tokio::test]
async fn submitted_text_is_echoed_escaped() {
    let (_, html) = submit(app(), "<i>flat</i> earth").await;
    assert!(html.contains("&lt;i&gt;flat&lt;/i&gt; earth</textarea>"));
}

#[tokio::test]
async fn non_ascii_and_reserved_characters_survive_the_form() {
    let (_, html) = submit(app(), "Café & Zürich: 100% sure?").await;
    assert!(html.contains("Café &amp; Zürich: 100% sure?</textarea>"));
}

#[tokio::test]
async fn resubmitting_same_text_renders_same_page() {
    let app = app();
    let (_, first) = submit(app.clone(), REAL_TEXT).await;
    let (_, second) = submit(app, REAL_TEXT).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unrecognized_class_renders_a_notice() {
    let predictor = Predictor::new(
        Arc::new(common::embedder()),
        Arc::new(common::classifier_with_classes(vec![0, 2])),
    )
    .unwrap();
    let (status, html) = submit(app_with(predictor), REAL_TEXT).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("unrecognized label (2)"));
    assert!(!html.contains(FAKE_HTML));
    assert!(!html.contains(REAL_HTML));
}

#[tokio::test]
async fn api_predict_classifies() {
    let (status, json) = post_json(app(), serde_json::json!({ "text": FAKE_TEXT })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "classified");
    assert_eq!(json["label"], "fake");
    assert_eq!(json["class"], 0);
    assert_eq!(json["message"], "The news is FAKE.");
    assert!(json["score"].as_f64().unwrap() > 0.5);
}

#[tokio::test]
async fn api_predict_empty_text() {
    let (status, json) = post_json(app(), serde_json::json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "empty");
    assert_eq!(json["message"], EMPTY_INPUT_WARNING);
    assert!(json.get("label").is_none());
}

#[tokio::test]
async fn health_reports_model_shape() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["dimension"], 2);
    assert_eq!(json["classes"], serde_json::json!([0, 1]));
}

#[tokio::test]
async fn stylesheet_is_served() {
    let request = Request::builder()
        .uri("/static/style.css")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
}

#[tokio::test]
async fn unknown_asset_is_not_found() {
    let request = Request::builder()
        .uri("/static/missing.js")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
