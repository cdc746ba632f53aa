use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unit of work delivered by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    /// Host-assigned identifier of any JSON type; only logged.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub input: Value,
}

/// Validated generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Passed through to the inference server without interpretation.
    #[serde(default)]
    pub sampling_params: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Fixed-shape response returned for every job, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub request_id: String,
    pub model_name: String,
    pub execution_time_ms: u64,
    pub status: Status,
    pub text_output: String,
    pub error_message: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(
        request_id: String,
        model_name: String,
        execution_time_ms: u64,
        text_output: String,
    ) -> Self {
        Self {
            request_id,
            model_name,
            execution_time_ms,
            status: Status::Success,
            text_output,
            error_message: None,
        }
    }

    pub fn error(
        request_id: String,
        model_name: String,
        execution_time_ms: u64,
        error_message: String,
    ) -> Self {
        Self {
            request_id,
            model_name,
            execution_time_ms,
            status: Status::Error,
            text_output: String::new(),
            error_message: Some(error_message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
