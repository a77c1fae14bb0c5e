use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

mod error;
mod middleware;
mod routes;
mod state;

use directory_core::config::Settings;
use directory_store::ChannelStore;

use crate::middleware::{logging::log_request, request_id::request_id};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env();

    let store = ChannelStore::load(&settings.data_file)?;
    info!(path = %store.path().display(), "channel store ready");

    // Unmatched routes fall through to the front-end bundle so client-side
    // routing keeps working on deep links.
    let spa = ServeDir::new(&settings.static_dir)
        .not_found_service(ServeFile::new(settings.static_dir.join("index.html")));

    let state = AppState {
        store: Arc::new(store),
        settings: Arc::new(settings),
    };

    let app = Router::new()
        .merge(routes::health_router())
        .merge(routes::api_router(state.clone()))
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .layer(from_fn(log_request))
        .layer(from_fn(request_id));

    let addr: SocketAddr = state.settings.bind.parse()?;
    info!(%addr, "starting api");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
