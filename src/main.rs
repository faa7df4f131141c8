// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::metrics_repository::MetricsRepository;
use crate::application::query_cache::QueryCache;
use crate::infrastructure::config::{load_settings, MetricsSettings, MetricsSource};
use crate::infrastructure::http_repository::HttpMetricsRepository;
use crate::infrastructure::mock_repository::MockMetricsRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_settings()?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create repository (infrastructure layer)
    let repository = build_repository(&settings.metrics)?;

    // One query cache for the whole process, shared by every page
    let cache = Arc::new(QueryCache::new(settings.query.policy()));
    let dashboard_service =
        DashboardService::new(repository, cache, settings.query.render_budget());

    let state = Arc::new(AppState { dashboard_service });
    let router = build_router(state);

    let addr: SocketAddr = settings.server.bind.parse()?;
    tracing::info!(%addr, source = ?settings.metrics.source, "starting chimera dashboard");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("chimera dashboard stopped");
    Ok(())
}

fn build_repository(metrics: &MetricsSettings) -> anyhow::Result<Arc<dyn MetricsRepository>> {
    match metrics.source {
        MetricsSource::Mock => Ok(Arc::new(MockMetricsRepository)),
        MetricsSource::Http => {
            let endpoint = metrics
                .endpoint
                .clone()
                .ok_or_else(|| anyhow::anyhow!("metrics.endpoint is not set"))?;
            let timeout = std::time::Duration::from_millis(metrics.timeout_ms);
            Ok(Arc::new(HttpMetricsRepository::new(endpoint, timeout)?))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
