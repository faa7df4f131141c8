// Dashboard metrics domain model
use serde::{Deserialize, Serialize};

/// Overall system health reported alongside the metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    #[default]
    Healthy,
    Warning,
    Critical,
}

/// Aggregate counts and scores shown on the dashboard.
///
/// Every field is optional on the wire: a source may omit any of them, and
/// the dashboard falls back to zero (or `healthy`) when it does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_agents: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_agents: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_completed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_relevance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_transactions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_health: Option<SystemHealth>,
}

impl DashboardMetrics {
    /// The fixed values served until a real metrics endpoint is configured.
    pub fn fixture() -> Self {
        Self {
            total_agents: Some(12),
            active_agents: Some(8),
            tasks_completed: Some(156),
            avg_relevance_score: Some(0.82),
            total_transactions: Some(24.5),
            system_health: Some(SystemHealth::Healthy),
        }
    }

    pub fn total_agents_or_zero(&self) -> u64 {
        self.total_agents.unwrap_or(0)
    }

    pub fn active_agents_or_zero(&self) -> u64 {
        self.active_agents.unwrap_or(0)
    }

    pub fn tasks_completed_or_zero(&self) -> u64 {
        self.tasks_completed.unwrap_or(0)
    }

    pub fn avg_relevance_or_zero(&self) -> f64 {
        self.avg_relevance_score.unwrap_or(0.0)
    }

    pub fn total_transactions_or_zero(&self) -> f64 {
        self.total_transactions.unwrap_or(0.0)
    }

    pub fn health_or_default(&self) -> SystemHealth {
        self.system_health.unwrap_or_default()
    }
}
