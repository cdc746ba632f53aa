mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the process configuration once at startup.
///
/// `CONFIG_PATH` names the YAML file. Without it, `config.yaml` is used when
/// present and built-in defaults otherwise. `MODEL_NAME` and
/// `INFERENCE_BASE_URL` override the file.
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    let config = config.with_overrides(
        env::var("MODEL_NAME").ok(),
        env::var("INFERENCE_BASE_URL").ok(),
    );
    config.validate()?;

    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    pub fn with_overrides(mut self, model_name: Option<String>, base_url: Option<String>) -> Self {
        if let Some(name) = model_name.filter(|n| !n.is_empty()) {
            self.model.name = name;
        }
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.inference.base_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let base_url = &self.inference.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "inference.base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        if self.inference.ready_poll_interval_ms == 0 {
            return Err(Error::config("inference.ready_poll_interval_ms must be positive"));
        }
        Ok(())
    }
}
