use crate::{Error, Result, config::InferenceConfig, error::error_chain};
use std::time::Duration;
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, info};

/// Polls the inference server's health endpoint until it answers with a
/// success status or `ready_timeout_secs` elapses.
pub async fn wait_for_ready(config: &InferenceConfig) -> Result<()> {
    let url = config.health_url();
    let client = reqwest::Client::new();
    let deadline = Instant::now() + Duration::from_secs(config.ready_timeout_secs);
    let interval = Duration::from_millis(config.ready_poll_interval_ms);

    info!("Waiting for {} server at {}", config.server_label, url);

    loop {
        // Each probe is bounded by what is left of the deadline.
        let remaining = deadline.saturating_duration_since(Instant::now());
        match timeout(remaining, client.get(&url).send()).await {
            Ok(Ok(response)) if response.status().is_success() => {
                info!("{} server is ready", config.server_label);
                return Ok(());
            }
            Ok(Ok(response)) => debug!("Health check returned {}", response.status()),
            Ok(Err(e)) => debug!("Health check failed: {}", error_chain(&e)),
            Err(_) => debug!("Health check timed out"),
        }

        if Instant::now() + interval > deadline {
            return Err(Error::not_ready(format!(
                "{} did not become healthy within {}s",
                url, config.ready_timeout_secs
            )));
        }
        sleep(interval).await;
    }
}
