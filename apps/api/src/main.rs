mod artifacts;
mod config;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod style;
mod synthesis;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::artifacts::{sweeper, ArtifactStore};
use crate::config::Config;
use crate::render::chromium::ChromiumRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first — every key has a default, so this only
    // fails on malformed values.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae render engine v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the artifact store (creates the output directory once).
    let store = Arc::new(ArtifactStore::new(&config.output_dir)?);
    info!("Artifact store ready at {}", config.output_dir.display());

    // Initialize the bounded Chromium pool.
    let renderer = Arc::new(ChromiumRenderer::new(
        config.render_pool_size,
        config.render_timeout(),
    ));
    info!(
        "Chromium renderer initialized (pool size: {}, timeout: {}s)",
        config.render_pool_size, config.render_timeout_secs
    );

    // Retention sweeper runs on its own schedule, independent of requests.
    tokio::spawn(sweeper::run(
        store.clone(),
        config.sweep_interval(),
        config.retention_max_age(),
    ));

    // Build app state
    let state = AppState {
        config: config.clone(),
        store,
        renderer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
