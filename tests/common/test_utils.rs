use sglang_bridge::{
    Result,
    config::{Config, InferenceConfig, LogsConfig, ModelConfig, ServerConfig},
};
use tempfile::TempDir;
use tokio::fs;

pub const TEST_MODEL: &str = "Qwen/Qwen2.5-0.5B-Instruct";

/// Create a test configuration pointing at the given inference server
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        model: ModelConfig {
            name: TEST_MODEL.to_string(),
        },
        inference: InferenceConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: Some(5),
            wait_for_ready: false,
            ready_timeout_secs: 1,
            ready_poll_interval_ms: 50,
            ..InferenceConfig::default()
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
model:
  name: "meta-llama/Llama-3.1-8B-Instruct"
inference:
  base_url: "http://sglang:30000"
  server_label: "SGLang"
  request_timeout_secs: 120
  wait_for_ready: false
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"
"#;
