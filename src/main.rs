use anyhow::Result;
use sglang_bridge::{config, engine, handler::RequestHandler, inference::SglangClient, server};
use std::sync::Arc;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?,
        )
        .json()
        .init();

    info!(
        "Starting bridge for model '{}' with log level: {}",
        config.model.name, log_level
    );

    if config.inference.wait_for_ready {
        engine::wait_for_ready(&config.inference).await?;
    }

    let client = SglangClient::new(&config.inference)?;
    info!("Forwarding jobs to {}", client.generate_url());

    let handler = Arc::new(RequestHandler::new(&config, Arc::new(client)));
    server::run(config, handler).await?;

    Ok(())
}
