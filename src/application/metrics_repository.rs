// Repository trait for dashboard metrics
use crate::domain::metrics::DashboardMetrics;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request to metrics source failed: {0}")]
    Transport(String),

    #[error("metrics source returned status {0}")]
    Status(u16),

    #[error("failed to decode metrics payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Fetch the current dashboard summary
    async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, FetchError>;
}
