//! Save sinks
//!
//! Without a backend, saves only wait out a simulated latency. With a backend
//! URL configured, records are POSTed to `{url}/api/workflows`.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use retailflow_sdk::{SaveError, WorkflowRecord, WorkflowSink};

use crate::config::Config;

const WORKFLOWS_PATH: &str = "/api/workflows";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Always succeeds after `delay`
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WorkflowSink for SimulatedSink {
    async fn submit(&self, record: &WorkflowRecord) -> Result<(), SaveError> {
        debug!(app = %record.trigger.app, delay_ms = self.delay.as_millis() as u64, "simulating save");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// POSTs each record as JSON to a backend
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(base_url: &str) -> Result<Self, SaveError> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), WORKFLOWS_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WorkflowSink for HttpSink {
    async fn submit(&self, record: &WorkflowRecord) -> Result<(), SaveError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "workflow POST failed");
                SaveError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "backend rejected workflow");
            return Err(SaveError::Rejected(status.to_string()));
        }

        debug!(endpoint = %self.endpoint, %status, "workflow accepted");
        Ok(())
    }
}

/// Pick the sink for this configuration
pub fn build_sink(config: &Config) -> anyhow::Result<Arc<dyn WorkflowSink>> {
    match &config.backend_url {
        Some(url) => Ok(Arc::new(HttpSink::new(url)?)),
        None => Ok(Arc::new(SimulatedSink::new(config.save_delay))),
    }
}
