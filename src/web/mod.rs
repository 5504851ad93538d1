// Web server: Axum-based single-page front end.
//
// GET / renders the page, POST / runs a prediction from the submitted form
// and re-renders the page with the verdict. POST /api/predict exposes the
// same flow as JSON. The stylesheet is embedded at compile time via
// include_dir!.
//
// Models are loaded once before the server starts and shared read-only
// through AppState.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use include_dir::{include_dir, Dir};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::inference::Predictor;

pub mod handlers;
pub mod page;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/web/static");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub config: Arc<Config>,
    /// RFC 3339 timestamp of when the models finished loading.
    pub loaded_at: String,
}

impl AppState {
    pub fn new(predictor: Arc<Predictor>, config: Arc<Config>) -> Self {
        Self {
            predictor,
            config,
            loaded_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, predictor: Predictor) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let state = AppState::new(Arc::new(predictor), Arc::new(config));

    let app = build_router(state);

    info!("newsprobe page listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::page::show_page).post(handlers::page::submit_page),
        )
        .route("/api/predict", post(handlers::predict::predict_json))
        .route("/health", get(health))
        .route("/static/{*path}", get(serve_static))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check with the loaded model shape.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "ok",
            "embedder": format!("{:?}", state.config.embedder_backend),
            "dimension": state.predictor.dimension(),
            "classes": state.predictor.classes(),
            "loaded_at": state.loaded_at,
        })),
    )
}

/// Serve an embedded static asset.
async fn serve_static(Path(path): Path<String>) -> Response {
    match ASSETS.get_file(&path) {
        Some(file) => asset_response(file.contents(), &path),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

fn asset_response(contents: &'static [u8], path: &str) -> Response {
    let mime = mime_type(path);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(mime))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn mime_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "css" => "text/css",
        "js" => "application/javascript",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
