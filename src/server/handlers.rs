use super::types::HealthResponse;
use crate::{
    handler::RequestHandler,
    job::{Job, ResponseEnvelope},
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

pub async fn run_sync(State(state): State<AppState>, Json(job): Json<Job>) -> Json<ResponseEnvelope> {
    debug!("Received job {:?}", job.id);
    Json(state.handler.handle(&job).await)
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_name: state.handler.model_name().to_string(),
    })
}
