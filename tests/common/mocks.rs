use async_trait::async_trait;
use serde_json::{Map, Value};
use sglang_bridge::{Error, Result, inference::InferenceClient};
use std::sync::{Arc, Mutex};

/// Recorded call to the mock inference client
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub sampling_params: Map<String, Value>,
}

/// Mock inference client for testing
#[derive(Debug, Default)]
pub struct MockInferenceClient {
    pub response: String,
    pub error: Option<String>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockInferenceClient {
    pub fn with_response(text: &str) -> Self {
        Self {
            response: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_error(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str, sampling_params: &Map<String, Value>) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            sampling_params: sampling_params.clone(),
        });

        match &self.error {
            Some(error) => Err(Error::downstream(error.clone())),
            None => Ok(self.response.clone()),
        }
    }
}
