// Page views - Layout shell and routed page bodies
use crate::application::query_cache::QueryState;
use crate::domain::activity::ACTIVITY_SERIES;
use crate::domain::metrics::DashboardMetrics;
use crate::domain::navigation::{self, Icon, NAVIGATION};
use crate::domain::pages::PlaceholderPage;
use crate::domain::task::RECENT_TASKS;
use crate::presentation::components::{
    ActivityChart, MetricCard, MetricChange, RecentTasksPanel, SystemHealthPanel,
};
use askama::Template;
use chrono::{DateTime, Utc};

pub const LOADING_TEXT: &str = "Loading dashboard...";
pub const ERROR_TEXT: &str = "Error loading dashboard";

#[derive(Debug, Clone)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Sidebar and header frame around a page body.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct Layout {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub content: String,
    pub refresh_secs: Option<u64>,
}

impl Layout {
    pub fn new(path: &str, content: String) -> Self {
        let nav = NAVIGATION
            .iter()
            .map(|item| NavLink {
                name: item.name,
                href: item.href,
                icon: item.icon.lucide_name(),
                active: item.href == path,
            })
            .collect();

        Self {
            title: navigation::title_for(path),
            nav,
            content,
            refresh_secs: None,
        }
    }

    /// Ask the browser to reload after `secs`, used while data is loading.
    pub fn refresh_after(mut self, secs: u64) -> Self {
        self.refresh_secs = Some(secs);
        self
    }
}

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardView {
    /// Render time as RFC 3339; the page rewrites it in the viewer's timezone
    pub last_updated_at: String,
    /// Server-side HH:MM:SS (UTC), shown when scripts do not run
    pub last_updated: String,
    pub cards: Vec<MetricCard>,
    pub activity: ActivityChart,
    pub recent_tasks: RecentTasksPanel,
    pub health: SystemHealthPanel,
    pub transactions: MetricCard,
}

impl DashboardView {
    /// Distribute fetched metrics into the dashboard's components; absent
    /// fields fall back to zero, absent health to `healthy`.
    pub fn new(metrics: &DashboardMetrics, last_updated: DateTime<Utc>) -> Self {
        let cards = vec![
            MetricCard::new("Total Agents", metrics.total_agents_or_zero(), Icon::Users)
                .with_change(MetricChange::increase(2.0))
                .with_description("Active AI agents in system"),
            MetricCard::new("Active Now", metrics.active_agents_or_zero(), Icon::Activity)
                .with_change(MetricChange::increase(1.0))
                .with_description("Currently processing tasks"),
            MetricCard::new(
                "Tasks Completed",
                metrics.tasks_completed_or_zero(),
                Icon::TrendingUp,
            )
            .with_change(MetricChange::increase(15.0))
            .with_description("Last 24 hours"),
            MetricCard::new(
                "Avg Relevance",
                two_decimals(metrics.avg_relevance_or_zero()),
                Icon::AlertCircle,
            )
            .with_change(MetricChange::increase(0.05))
            .with_description("Content relevance score"),
        ];

        let transactions = MetricCard::new(
            "Total Transactions",
            format!("${}", metrics.total_transactions_or_zero()),
            Icon::DollarSign,
        )
        .with_change(MetricChange::increase(3.2))
        .with_description("Crypto transactions volume");

        Self {
            last_updated_at: last_updated.to_rfc3339(),
            last_updated: last_updated.format("%H:%M:%S").to_string(),
            cards,
            activity: ActivityChart::new(&ACTIVITY_SERIES),
            recent_tasks: RecentTasksPanel::new(&RECENT_TASKS),
            health: SystemHealthPanel::new(metrics.health_or_default()),
            transactions,
        }
    }
}

/// Two-decimal rendering with ties rounded away from zero, so 0.125 reads
/// "0.13" rather than the round-half-even "0.12" of `{:.2}`.
fn two_decimals(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

/// Single-line status body for the loading and error states.
#[derive(Template)]
#[template(path = "pages/status.html")]
pub struct StatusView {
    pub message: &'static str,
    pub classes: &'static str,
}

#[derive(Template)]
#[template(path = "pages/placeholder.html")]
pub struct PlaceholderView {
    pub page: &'static PlaceholderPage,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundView;

/// Body of the dashboard page for the current state of its metrics query.
pub fn dashboard_body(
    state: &QueryState<DashboardMetrics>,
    last_updated: DateTime<Utc>,
) -> askama::Result<String> {
    match state {
        QueryState::Loading => StatusView {
            message: LOADING_TEXT,
            classes: "p-6",
        }
        .render(),
        QueryState::Error => StatusView {
            message: ERROR_TEXT,
            classes: "p-6 text-red-500",
        }
        .render(),
        QueryState::Ready(metrics) => DashboardView::new(metrics, last_updated).render(),
    }
}
