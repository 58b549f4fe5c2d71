use music_backend::{
    app,
    config::{get_config, init_config},
    database::pool::{create_pool, migrate},
    AppOptions, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("music_backend=info,tower_http=info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    migrate(&pool).await?;

    let app_state = AppState::new(pool);
    info!(
        music_root = %config.music_root.display(),
        drive = app_state.drive_service.is_some(),
        "Services initialised"
    );

    let options = AppOptions {
        contest_rps: config.contest_rps,
        cors_origins: config.cors_origins.clone(),
    };
    let router = app(app_state, &options);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
