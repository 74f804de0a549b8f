mod config;
mod data;
mod errors;
mod insights;
mod listings;
mod models;
mod routes;
mod state;
mod taxonomy;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::data::load_listings;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement Board API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static listing collection; it is read-only from here on
    let listings = load_listings(&config)?;
    info!(
        "Loaded {} listings{}",
        listings.len(),
        config
            .data_path
            .as_deref()
            .map(|p| format!(" from {p}"))
            .unwrap_or_else(|| " (embedded dataset)".to_string())
    );

    let state = AppState {
        listings: Arc::new(listings),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
