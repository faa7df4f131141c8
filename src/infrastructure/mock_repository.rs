// Mock repository - Fixed metrics until a real endpoint is configured
use crate::application::metrics_repository::{FetchError, MetricsRepository};
use crate::domain::metrics::DashboardMetrics;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct MockMetricsRepository;

#[async_trait]
impl MetricsRepository for MockMetricsRepository {
    async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, FetchError> {
        Ok(DashboardMetrics::fixture())
    }
}
