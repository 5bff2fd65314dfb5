//! Marketing Site Preview Server
//!
//! Serves the built WASM frontend with an SPA fallback and accepts the
//! contact form the way the static host does.

mod config;
mod handlers;
mod state;

use std::path::Path;

use axum::{handler::Handler, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_core::SiteConfig;

use crate::config::ServerConfig;
use crate::handlers::{accept_form, health_check, spa};
use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static files first, page routes fall back to the SPA shell
    let assets = ServeDir::new(static_dir).fallback(spa.with_state(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(spa).post(accept_form))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    let site = SiteConfig::from_build_env()?;

    // Build application state
    let state = AppState::load(&config, site).await?;
    tracing::info!("✓ Serving {}", config.static_dir.display());

    let app = router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 site preview running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  POST /       - Contact form");
    tracing::info!("  GET  /*      - Static assets, SPA fallback");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
