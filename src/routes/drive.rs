use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::drive_dto::{DriveAudioFile, DriveFile, DriveFileList, DriveFilesResponse, MusicSearchQuery},
    error::{Error, Result},
    services::drive_service::DriveService,
    AppState,
};

pub(crate) fn drive(state: &AppState) -> Result<&DriveService> {
    state
        .drive_service
        .as_ref()
        .ok_or_else(|| Error::ServiceUnavailable("Google Drive is not configured".to_string()))
}

#[utoipa::path(
    get,
    path = "/drive/folders/{id}",
    params(
        ("id" = String, Path, description = "Drive folder id")
    ),
    responses(
        (status = 200, description = "Files in the folder", body = Json<DriveFilesResponse<DriveFile>>),
        (status = 503, description = "Drive is not configured")
    )
)]
#[axum::debug_handler]
pub async fn list_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let files = drive(&state)?.list_folder(&id).await?;
    Ok(Json(DriveFilesResponse { files }))
}

#[utoipa::path(
    get,
    path = "/drive/folders/{id}/audio",
    params(
        ("id" = String, Path, description = "Drive folder id")
    ),
    responses(
        (status = 200, description = "Audio files with embedded covers", body = Json<DriveFilesResponse<DriveAudioFile>>),
        (status = 503, description = "Drive is not configured")
    )
)]
#[axum::debug_handler]
pub async fn list_folder_audio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let files = drive(&state)?
        .list_audio_with_embedded_thumbnails(&id)
        .await?;
    Ok(Json(DriveFilesResponse { files }))
}

#[utoipa::path(
    get,
    path = "/drive/music/search",
    params(
        ("folderId" = String, Query, description = "Folder to search in"),
        ("query" = String, Query, description = "Name fragment, at least 2 characters"),
        ("pageSize" = Option<u32>, Query, description = "Page size, clamped to 5..=50"),
        ("pageToken" = Option<String>, Query, description = "Continuation token")
    ),
    responses(
        (status = 200, description = "Matching audio files", body = Json<DriveFileList>),
        (status = 400, description = "Missing folderId or query too short"),
        (status = 503, description = "Drive is not configured")
    )
)]
#[axum::debug_handler]
pub async fn search_music(
    State(state): State<AppState>,
    Query(query): Query<MusicSearchQuery>,
) -> Result<impl IntoResponse> {
    let search = query.into_search()?;
    let result = drive(&state)?.search_audio(&search).await?;
    Ok(Json(result))
}
