pub mod state;

pub use state::{HandlerEvent, HandlerState, HandlerStateMachine, Outcome};

use crate::{
    config::Config,
    inference::InferenceClient,
    job::{self, Job, ResponseEnvelope},
};
use serde_json::Value;
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Turns jobs into response envelopes.
///
/// Holds only read-only state fixed at startup, so one instance can serve
/// concurrent jobs without locking.
pub struct RequestHandler {
    model_name: String,
    server_label: String,
    client: Arc<dyn InferenceClient>,
}

impl RequestHandler {
    pub fn new(config: &Config, client: Arc<dyn InferenceClient>) -> Self {
        Self {
            model_name: config.model.name.clone(),
            server_label: config.inference.server_label.clone(),
            client,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Runs one job to completion. Never fails: validation and downstream
    /// errors are reported in the returned envelope.
    pub async fn handle(&self, job: &Job) -> ResponseEnvelope {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        let mut fsm = HandlerStateMachine::new(request_id.clone());

        let job_id = job.id.as_ref().map_or_else(|| "-".to_string(), Value::to_string);
        info!("Handling job {} as request {}", job_id, request_id);

        step(&mut fsm, HandlerEvent::Begin);
        let outcome = match job::validate(&job.input) {
            Err(e) => {
                step(&mut fsm, HandlerEvent::InputInvalid);
                Outcome::ValidationFailed(format!("Input validation failed: {}", e))
            }
            Ok(request) => {
                step(&mut fsm, HandlerEvent::InputValid);
                match self
                    .client
                    .generate(&request.prompt, &request.sampling_params)
                    .await
                {
                    Ok(text) => {
                        step(&mut fsm, HandlerEvent::GenerationSucceeded);
                        Outcome::Success(text)
                    }
                    Err(e) => {
                        step(&mut fsm, HandlerEvent::GenerationFailed);
                        Outcome::DownstreamFailed(format!(
                            "Request to {} server failed: {}",
                            self.server_label, e
                        ))
                    }
                }
            }
        };

        let execution_time_ms = start.elapsed().as_millis() as u64;
        let envelope = match outcome {
            Outcome::Success(text) => {
                info!(
                    "Request {} succeeded in {} ms ({} chars)",
                    request_id,
                    execution_time_ms,
                    text.len()
                );
                ResponseEnvelope::success(
                    request_id,
                    self.model_name.clone(),
                    execution_time_ms,
                    text,
                )
            }
            Outcome::ValidationFailed(message) | Outcome::DownstreamFailed(message) => {
                warn!(
                    "Request {} failed in {} ms: {}",
                    request_id, execution_time_ms, message
                );
                ResponseEnvelope::error(
                    request_id,
                    self.model_name.clone(),
                    execution_time_ms,
                    message,
                )
            }
        };
        step(&mut fsm, HandlerEvent::EnvelopeBuilt);

        envelope
    }
}

fn step(fsm: &mut HandlerStateMachine, event: HandlerEvent) {
    if let Err(e) = fsm.transition(event) {
        error!("Handler state machine out of sync: {}", e);
    }
}
