use super::types::GenerateBody;
use crate::{Error, Result, config::InferenceConfig, error::error_chain};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Issues exactly one generation call and returns the generated text.
    async fn generate(&self, prompt: &str, sampling_params: &Map<String, Value>) -> Result<String>;
}

pub struct SglangClient {
    client: reqwest::Client,
    generate_url: String,
}

impl SglangClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            generate_url: config.generate_url(),
        })
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }
}

#[async_trait]
impl InferenceClient for SglangClient {
    async fn generate(&self, prompt: &str, sampling_params: &Map<String, Value>) -> Result<String> {
        let body = GenerateBody::new(prompt, sampling_params);

        debug!(
            "POST {} with {} sampling params",
            self.generate_url,
            body.sampling_params.len()
        );

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(&self.generate_url)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::downstream(error_chain(&e)))?;

        let payload: Value = response
            .json()
            .await
            .map_err(|e| {
                Error::downstream(format!("invalid response body: {}", error_chain(&e)))
            })?;

        extract_text(&payload)
    }
}

/// Pulls `text` out of a generate response. A missing or null field yields an
/// empty string.
pub fn extract_text(payload: &Value) -> Result<String> {
    match payload.get("text") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(Error::downstream(format!(
            "unexpected `text` field in response: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = InferenceConfig {
            base_url: "http://sglang:30000".to_string(),
            request_timeout_secs: Some(30),
            ..InferenceConfig::default()
        };

        let client = SglangClient::new(&config).unwrap();
        assert_eq!(client.generate_url(), "http://sglang:30000/generate");
    }

    #[test]
    fn test_extract_text() {
        assert_eq!(extract_text(&json!({"text": "hello world"})).unwrap(), "hello world");
        assert_eq!(extract_text(&json!({"meta_info": {}})).unwrap(), "");
        assert_eq!(extract_text(&json!({"text": null})).unwrap(), "");
        assert_eq!(extract_text(&json!(["not", "an", "object"])).unwrap(), "");
    }

    #[test]
    fn test_extract_text_rejects_non_string() {
        let err = extract_text(&json!({"text": 7})).unwrap_err();
        assert!(matches!(err, Error::Downstream(_)));
    }
}
