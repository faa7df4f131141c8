// HTTP repository implementation - Reads metrics from a JSON endpoint
use crate::application::metrics_repository::{FetchError, MetricsRepository};
use crate::domain::metrics::DashboardMetrics;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpMetricsRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMetricsRepository {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MetricsRepository for HttpMetricsRepository {
    async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching dashboard metrics");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .json::<DashboardMetrics>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
