//! Homepage props endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use content::{ContentError, HomeProps};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) fn content_error_to_status(err: &ContentError) -> StatusCode {
    match err {
        ContentError::Io { .. } => StatusCode::SERVICE_UNAVAILABLE,
        ContentError::UnsupportedFormat { .. }
        | ContentError::Yaml(_)
        | ContentError::Json(_)
        | ContentError::DuplicateKey { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// `GET /api/home` — the props record the home page renders.
pub async fn home_props(State(state): State<AppState>) -> Json<HomeProps> {
    Json(state.snapshot().as_ref().clone())
}

/// `POST /api/home/reload` — re-read the content source.
///
/// On failure the previous props stay live and the error is returned.
pub async fn reload_home_props(
    State(state): State<AppState>,
) -> Result<Json<HomeProps>, (StatusCode, Json<ErrorBody>)> {
    match state.reload() {
        Ok(props) => {
            tracing::info!(source = %state.source_label(), "homepage props reloaded");
            Ok(Json(props.as_ref().clone()))
        }
        Err(e) => {
            tracing::warn!(source = %state.source_label(), error = %e, "homepage reload failed; keeping previous props");
            Err((content_error_to_status(&e), Json(ErrorBody { error: e.to_string() })))
        }
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
