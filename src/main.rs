// =============================================================================
// ChainTrack AI - API Server Entry Point
// =============================================================================
// Table of Contents:
// 1. Main Entry Point
// 2. Shutdown Signal
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chaintrack_ai::{api, AppState, Config, ServiceError};

// -----------------------------------------------------------------------------
// 1. Main Entry Point
// -----------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing .env file is fine; the environment alone is enough
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let config = Config::from_env()?;
    let bind_addr = config.bind_address;

    let state = AppState::new(config)?;
    tracing::info!(
        rng = state.predictor.source_name(),
        seed = ?state.config.prediction_seed,
        cors = state.config.cors_enabled,
        "Prediction service configured"
    );

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("ChainTrack AI API running on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

// -----------------------------------------------------------------------------
// 2. Shutdown Signal
// -----------------------------------------------------------------------------

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
