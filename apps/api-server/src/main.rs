//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::io;

mod config;
mod handlers;
mod middleware;
mod observability;
mod server;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting blog posts API on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.database.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to initialize application state: {}", e);
            io::Error::other(e)
        })?;

    let running = server::run_server(&config, state)?;

    tokio::signal::ctrl_c().await?;

    server::close_server(running).await
}
