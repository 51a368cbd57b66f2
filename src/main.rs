//! # Gradebook API server
//!
//! 1. Parse [`Config`] from flags and environment.
//! 2. Start the stores ([`RosterSystem`]) and load the demo data.
//! 3. Serve the router until Ctrl-C, then stop the stores.

use anyhow::Context;
use clap::Parser;
use gradebook_api::api::{self, AppState};
use gradebook_api::config::Config;
use gradebook_api::lifecycle::{setup_tracing, RosterSystem};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!(?config, "Starting gradebook service");

    let system = RosterSystem::new(config.store_options());
    let counts = system.demo.seed().await?;
    info!(users = counts.users, courses = counts.courses, "Stores ready");

    let cors = api::cors_layer(&config.allowed_origins).context("invalid allowed origin")?;
    let app = api::router(AppState::new(&system, config.not_found)).layer(cors);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router (and its client clones) is gone once serve returns.
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
