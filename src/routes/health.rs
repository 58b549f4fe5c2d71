use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "drive": state.drive_service.is_some(),
        "musicRoot": state.library_service.root().display().to_string(),
    });
    (StatusCode::OK, Json(body))
}
