use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use movie_proxy::config::settings::AppConfig;
use movie_proxy::infrastructure::tmdb::TmdbClient;
use movie_proxy::{create_app, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("TMDB_API_KEY must be set")?;
    let upstream = TmdbClient::new(&config).context("failed to build TMDb client")?;
    let addr = config.bind_addr();

    let app = create_app(AppState::new(config, Arc::new(upstream)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("✅ Server running on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
