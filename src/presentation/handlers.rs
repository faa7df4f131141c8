// HTTP request handlers
use crate::application::query_cache::QueryState;
use crate::domain::metrics::DashboardMetrics;
use crate::domain::pages::PlaceholderPage;
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use crate::presentation::views::{self, Layout, NotFoundView, PlaceholderView};
use askama::Template;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

/// Seconds before a page served in the loading state reloads itself.
const LOADING_REFRESH_SECS: u64 = 2;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page, composed from the cached metrics query.
///
/// "Last updated" is stamped with the server clock and converted to the
/// viewer's local time by the page script.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let metrics = state.dashboard_service.load().await;
    let last_updated = chrono::Utc::now();

    let body = views::dashboard_body(&metrics, last_updated)?;
    let mut layout = Layout::new("/", body);
    if matches!(metrics, QueryState::Loading) {
        layout = layout.refresh_after(LOADING_REFRESH_SECS);
    }

    Ok(Html(layout.render()?))
}

/// Static placeholder page for one of the not-yet-built sections
pub async fn placeholder(page: &'static PlaceholderPage) -> Result<Html<String>, AppError> {
    let body = PlaceholderView { page }.render()?;
    Ok(Html(Layout::new(page.path, body).render()?))
}

/// Any path outside the route table
pub async fn not_found(uri: Uri) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(path = %uri.path(), "no route for path");
    let body = NotFoundView.render()?;
    let page = Layout::new(uri.path(), body).render()?;
    Ok((StatusCode::NOT_FOUND, Html(page)))
}

/// Current metrics as JSON, served from the same cache as the dashboard
pub async fn dashboard_metrics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardMetrics>, (StatusCode, Json<serde_json::Value>)> {
    state.dashboard_service.metrics().await.map(Json).map_err(|e| {
        tracing::warn!(error = %e, "metrics api request failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
    })
}
