use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::contest_dto::{LeaderboardSummary, SubmissionPayload, SubmissionResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/contest/submissions",
    request_body = SubmissionPayload,
    responses(
        (status = 201, description = "Submission stored", body = Json<SubmissionResponse>),
        (status = 400, description = "Invalid handles or display name"),
        (status = 429, description = "Too many submissions")
    )
)]
#[axum::debug_handler]
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let submission = state.contest_service.submit(payload).await?;
    let leaderboard = state.contest_service.leaderboard().await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            submission,
            leaderboard,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/contest/leaderboard",
    responses(
        (status = 200, description = "Top participants", body = Json<LeaderboardSummary>)
    )
)]
#[axum::debug_handler]
pub async fn leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let leaderboard = state.contest_service.leaderboard().await?;
    Ok(Json(leaderboard))
}
