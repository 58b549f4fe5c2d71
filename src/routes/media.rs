use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    error::{Error, Result},
    routes::drive::drive,
    AppState,
};

const FORWARDED_HEADERS: &[&str] = &[
    "content-length",
    "content-range",
    "accept-ranges",
    "etag",
    "last-modified",
    "cache-control",
];

#[utoipa::path(
    get,
    path = "/media/audio/{id}",
    params(
        ("id" = String, Path, description = "Drive file id")
    ),
    responses(
        (status = 200, description = "Audio content"),
        (status = 206, description = "Partial audio content"),
        (status = 404, description = "Audio could not be streamed"),
        (status = 503, description = "Drive is not configured")
    )
)]
#[axum::debug_handler]
pub async fn stream_audio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let range = headers.get(header::RANGE).and_then(|v| v.to_str().ok());
    let upstream = drive(&state)?.stream_audio(&id, range).await?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::OK);
    let content_type = upstream
        .headers()
        .get("content-type")
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("audio/mpeg"));

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type);
    for name in FORWARDED_HEADERS {
        if let Some(value) = upstream
            .headers()
            .get(*name)
            .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
        {
            builder = builder.header(HeaderName::from_static(*name), value);
        }
    }

    builder
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|e| Error::Internal(format!("Failed to build stream response: {}", e)))
}

#[utoipa::path(
    get,
    path = "/media/thumbnail/{id}",
    params(
        ("id" = String, Path, description = "Drive file id")
    ),
    responses(
        (status = 302, description = "Redirect to the thumbnail or icon"),
        (status = 404, description = "Thumbnail not available"),
        (status = 503, description = "Drive is not configured")
    )
)]
#[axum::debug_handler]
pub async fn thumbnail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let link = drive(&state)?.thumbnail_link(&id).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, link)]))
}
