// Route table
use crate::domain::pages::PLACEHOLDER_PAGES;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard, dashboard_metrics, health_check, not_found, placeholder,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(health_check))
        .route("/api/dashboard/metrics", get(dashboard_metrics));

    for page in PLACEHOLDER_PAGES.iter() {
        router = router.route(page.path, get(move || placeholder(page)));
    }

    router
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
