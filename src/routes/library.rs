use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tokio::io::AsyncReadExt;
use tokio_util::io::ReaderStream;
use tracing::error;

use crate::{
    dto::library_dto::{AlbumTracksResponse, AlbumsResponse},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/library/albums",
    responses(
        (status = 200, description = "Albums found under the music root", body = Json<AlbumsResponse>),
        (status = 500, description = "Music root could not be read")
    )
)]
#[axum::debug_handler]
pub async fn list_albums(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let albums = state.library_service.list_albums().await.map_err(|e| {
        error!("Failed to list albums: {}", e);
        Error::Internal("Failed to load albums".to_string())
    })?;
    Ok(Json(AlbumsResponse { albums }))
}

#[utoipa::path(
    get,
    path = "/library/albums/{id}/tracks",
    params(
        ("id" = String, Path, description = "Album id")
    ),
    responses(
        (status = 200, description = "Album with its tracks", body = Json<AlbumTracksResponse>),
        (status = 404, description = "Album not found")
    )
)]
#[axum::debug_handler]
pub async fn get_album_tracks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let album = state.library_service.get_album_tracks(&id).await?;
    Ok(Json(album))
}

#[utoipa::path(
    get,
    path = "/library/cover/{id}",
    params(
        ("id" = String, Path, description = "Album id")
    ),
    responses(
        (status = 200, description = "Cover image bytes"),
        (status = 404, description = "Album has no cover")
    )
)]
#[axum::debug_handler]
pub async fn get_cover(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let cover = state
        .library_service
        .get_cover(&id)
        .await?
        .ok_or_else(|| Error::NotFound("Cover not found".to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, cover.mime_type),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        cover.bytes,
    ))
}

#[utoipa::path(
    get,
    path = "/library/stream/{id}",
    params(
        ("id" = String, Path, description = "Track id")
    ),
    responses(
        (status = 200, description = "Whole track"),
        (status = 206, description = "Requested byte range"),
        (status = 404, description = "Track not found"),
        (status = 416, description = "Range not satisfiable")
    )
)]
#[axum::debug_handler]
pub async fn stream_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let range = headers.get(header::RANGE).and_then(|v| v.to_str().ok());
    let track = state.library_service.stream_track(&id, range).await?;

    let length = track.content_length();
    let mut builder = Response::builder()
        .header(header::CONTENT_TYPE, track.mime_type)
        .header(header::CONTENT_LENGTH, length)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, "public, max-age=0");

    builder = match track.range {
        Some(r) => builder
            .status(StatusCode::PARTIAL_CONTENT)
            .header(header::CONTENT_RANGE, r.content_range(track.size)),
        None => builder.status(StatusCode::OK),
    };

    let body = Body::from_stream(ReaderStream::new(track.file.take(length)));
    builder
        .body(body)
        .map_err(|e| Error::Internal(format!("Failed to build stream response: {}", e)))
}
