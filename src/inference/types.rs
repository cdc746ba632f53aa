use serde::Serialize;
use serde_json::{Map, Value};

/// Body of a `/generate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateBody {
    pub text: String,
    pub sampling_params: Map<String, Value>,
}

impl GenerateBody {
    /// Copies the caller's parameters and then forces `stream` to `false`,
    /// whatever the caller sent under that key.
    pub fn new(prompt: &str, sampling_params: &Map<String, Value>) -> Self {
        let mut params = sampling_params.clone();
        params.insert("stream".to_string(), Value::Bool(false));

        Self {
            text: prompt.to_string(),
            sampling_params: params,
        }
    }
}
