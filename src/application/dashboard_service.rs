// Dashboard service - Use case for loading dashboard metrics
use crate::application::metrics_repository::{FetchError, MetricsRepository};
use crate::application::query_cache::{QueryCache, QueryState};
use crate::domain::metrics::DashboardMetrics;
use std::sync::Arc;
use std::time::Duration;

pub const METRICS_QUERY_KEY: &str = "dashboard-metrics";

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn MetricsRepository>,
    cache: Arc<QueryCache<DashboardMetrics>>,
    render_budget: Duration,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn MetricsRepository>,
        cache: Arc<QueryCache<DashboardMetrics>>,
        render_budget: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            render_budget,
        }
    }

    /// Metrics through the shared cache; errors once retries are exhausted.
    pub async fn metrics(&self) -> Result<DashboardMetrics, FetchError> {
        let repository = self.repository.clone();
        self.cache
            .fetch(METRICS_QUERY_KEY, move || {
                let repository = repository.clone();
                async move { repository.fetch_dashboard_metrics().await }
            })
            .await
    }

    /// Load metrics for a page render, waiting at most the render budget.
    ///
    /// The fetch runs in its own task, so when the budget runs out it keeps
    /// going and a later render picks up the cached result.
    pub async fn load(&self) -> QueryState<DashboardMetrics> {
        let service = self.clone();
        let fetch = tokio::spawn(async move { service.metrics().await });

        match tokio::time::timeout(self.render_budget, fetch).await {
            Ok(Ok(Ok(metrics))) => QueryState::Ready(metrics),
            Ok(Ok(Err(e))) => {
                tracing::error!(error = %e, "dashboard metrics unavailable");
                QueryState::Error
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "dashboard metrics task failed");
                QueryState::Error
            }
            Err(_) => {
                tracing::debug!(
                    budget = ?self.render_budget,
                    "dashboard metrics still loading"
                );
                QueryState::Loading
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::query_cache::QueryPolicy;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubRepository {
        calls: AtomicUsize,
        delay: Duration,
        fail: bool,
    }

    impl StubRepository {
        fn new(delay: Duration, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                delay,
                fail,
            })
        }
    }

    #[async_trait]
    impl MetricsRepository for StubRepository {
        async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if self.fail {
                Err(FetchError::Status(500))
            } else {
                Ok(DashboardMetrics::fixture())
            }
        }
    }

    fn cache() -> Arc<QueryCache<DashboardMetrics>> {
        Arc::new(QueryCache::new(QueryPolicy {
            retry_base_delay: Duration::ZERO,
            retry_max_delay: Duration::ZERO,
            ..QueryPolicy::default()
        }))
    }

    #[tokio::test]
    async fn test_load_ready() {
        let repo = StubRepository::new(Duration::ZERO, false);
        let service = DashboardService::new(repo.clone(), cache(), Duration::from_secs(1));

        assert_eq!(service.load().await, QueryState::Ready(DashboardMetrics::fixture()));
        assert_eq!(service.load().await, QueryState::Ready(DashboardMetrics::fixture()));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_error_after_retries() {
        let repo = StubRepository::new(Duration::ZERO, true);
        let service = DashboardService::new(repo.clone(), cache(), Duration::from_secs(1));

        assert_eq!(service.load().await, QueryState::Error);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_load_reports_loading_then_ready() {
        let repo = StubRepository::new(Duration::from_millis(100), false);
        let shared = cache();

        let impatient = DashboardService::new(repo.clone(), shared.clone(), Duration::from_millis(5));
        assert_eq!(impatient.load().await, QueryState::Loading);

        // The first fetch is still running; a patient reader waits for it
        // instead of starting another one.
        let patient = DashboardService::new(repo.clone(), shared, Duration::from_secs(2));
        assert_eq!(patient.load().await, QueryState::Ready(DashboardMetrics::fixture()));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reloading_reaches_error_when_backoff_outlasts_budget() {
        let repo = StubRepository::new(Duration::ZERO, true);
        // Default policy scaled down: 10+20+40ms of backoff against a 20ms budget.
        let cache = Arc::new(QueryCache::new(QueryPolicy {
            retry_base_delay: Duration::from_millis(10),
            retry_max_delay: Duration::from_millis(300),
            ..QueryPolicy::default()
        }));
        let service = DashboardService::new(repo.clone(), cache, Duration::from_millis(20));

        let mut states = Vec::new();
        for _ in 0..40 {
            let state = service.load().await;
            let done = state == QueryState::Error;
            states.push(state);
            if done {
                break;
            }
        }

        assert_eq!(states.first(), Some(&QueryState::Loading));
        assert_eq!(states.last(), Some(&QueryState::Error));
        // Reloads while the first fetch retried shared its failure.
        assert_eq!(repo.calls.load(Ordering::SeqCst), 4);
        assert_eq!(service.load().await, QueryState::Error);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 4);
    }
}
