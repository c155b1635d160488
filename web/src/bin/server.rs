//! Room Booking Server
//!
//! Serves the `/api/reserva` endpoints over an in-memory booking service.
//!
//! # Usage
//!
//! ```bash
//! PORT=3050 BOOKING_ID_SCHEME=uuid cargo run --bin server
//! ```

use anyhow::Context;
use room_booking_web::{build_router, AppState, Config};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,room_booking_core=debug,room_booking_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Room Booking Server...");

    let config = Config::from_env();
    tracing::info!(
        address = %config.bind_address(),
        id_scheme = %config.bookings.id_scheme,
        log_level = %config.server.log_level,
        "Configuration loaded"
    );

    let app = build_router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    tracing::info!(address = %config.bind_address(), "✓ Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.shutdown_timeout()))
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C. In-flight requests then get `timeout` to finish
/// before the process exits anyway.
async fn shutdown_signal(timeout: Duration) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }

    tracing::info!(timeout_secs = timeout.as_secs(), "Shutting down gracefully...");

    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::warn!("Shutdown timeout elapsed, exiting");
        std::process::exit(1);
    });
}
