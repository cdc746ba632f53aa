pub mod handlers;
mod types;

pub use types::HealthResponse;

use crate::{Result, config::Config, handler::RequestHandler};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(handler: Arc<RequestHandler>) -> Router {
    let app_state = handlers::AppState { handler };

    Router::new()
        .route("/runsync", post(handlers::run_sync))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config, handler: Arc<RequestHandler>) -> Result<()> {
    let app = router(handler);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
