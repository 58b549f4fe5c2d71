pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod hh;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::services::{
    contest_service::ContestService, drive_service::DriveService,
    library_service::LibraryService,
};

#[derive(Clone)]
pub struct AppState {
    pub library_service: LibraryService,
    pub drive_service: Option<DriveService>,
    pub contest_service: ContestService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        Self::from_parts(
            pool,
            LibraryService::new(config.music_root.clone()),
            DriveService::from_config(config),
        )
    }

    pub fn from_parts(
        pool: PgPool,
        library_service: LibraryService,
        drive_service: Option<DriveService>,
    ) -> Self {
        Self {
            contest_service: ContestService::new(pool),
            library_service,
            drive_service,
        }
    }
}

/// Router settings that come from configuration rather than state.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub contest_rps: u32,
    pub cors_origins: Vec<String>,
}

pub fn app(state: AppState, options: &AppOptions) -> Router {
    let base_routes = Router::new().route("/health", get(routes::health::health));

    let library_api = Router::new()
        .route("/library/albums", get(routes::library::list_albums))
        .route(
            "/library/albums/:id/tracks",
            get(routes::library::get_album_tracks),
        )
        .route("/library/cover/:id", get(routes::library::get_cover))
        .route("/library/stream/:id", get(routes::library::stream_track));

    let drive_api = Router::new()
        .route("/drive/folders/:id", get(routes::drive::list_folder))
        .route(
            "/drive/folders/:id/audio",
            get(routes::drive::list_folder_audio),
        )
        .route("/drive/music/search", get(routes::drive::search_music))
        .route("/media/audio/:id", get(routes::media::stream_audio))
        .route("/media/thumbnail/:id", get(routes::media::thumbnail));

    let contest_api = Router::new()
        .route("/contest/submissions", post(routes::contest::submit))
        .route_layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(options.contest_rps),
            middleware::rate_limit::rps_middleware,
        ))
        .route("/contest/leaderboard", get(routes::contest::leaderboard));

    base_routes
        .merge(library_api)
        .merge(drive_api)
        .merge(contest_api)
        .with_state(state)
        .layer(middleware::cors::cors_layer(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}
