// Page handlers — GET / and POST /.
//
// GET renders the empty form, which carries the empty-input warning.
// POST runs the prediction only when the form is submitted, then renders
// exactly one notice: the warning, the FAKE/REAL verdict, or an error.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::inference::{Verdict, EMPTY_INPUT_WARNING};
use crate::web::page::{render, verdict_notice, Notice};
use crate::web::AppState;

#[derive(Deserialize, Default)]
pub struct PredictForm {
    #[serde(default)]
    pub news_text: String,
}

/// GET / — the blank page.
pub async fn show_page() -> Html<String> {
    Html(render("", Some(&Notice::warning(EMPTY_INPUT_WARNING))))
}

/// POST / — classify the submitted text and show the verdict.
pub async fn submit_page(State(state): State<AppState>, Form(form): Form<PredictForm>) -> Response {
    match state.predictor.predict(&form.news_text).await {
        Ok(verdict) => {
            if let Verdict::Classified { label, score } = &verdict {
                tracing::info!(label = %label, score = *score, "Page prediction");
            }
            Html(render(&form.news_text, Some(&verdict_notice(&verdict)))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Prediction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render(
                    &form.news_text,
                    Some(&Notice::error("Prediction failed. See server logs.")),
                )),
            )
                .into_response()
        }
    }
}
