// POST /api/predict — JSON variant of the page flow.
//
// Request:  { "text": "..." }
// Response: the Verdict (tagged by "status") plus the user-facing message.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: String,
}

pub async fn predict_json(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> Response {
    match state.predictor.predict(&body.text).await {
        Ok(verdict) => {
            let mut json = serde_json::to_value(&verdict).unwrap_or_default();
            json["message"] = serde_json::Value::String(verdict.message());
            if let Some(label) = verdict.label() {
                json["class"] = serde_json::json!(label.class());
            }
            Json(json).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Prediction failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed")
        }
    }
}
