use crate::application::query_cache::QueryPolicy;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub query: QuerySettings,
    pub metrics: MetricsSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuerySettings {
    pub stale_time_secs: u64,
    pub retry: u32,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
    pub error_time_secs: u64,
    pub render_budget_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricsSource {
    Mock,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsSettings {
    pub source: MetricsSource,
    pub endpoint: Option<String>,
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub filter: String,
}

impl QuerySettings {
    pub fn policy(&self) -> QueryPolicy {
        QueryPolicy {
            stale_time: Duration::from_secs(self.stale_time_secs),
            retry: self.retry,
            retry_base_delay: Duration::from_millis(self.retry_base_delay_ms),
            retry_max_delay: Duration::from_millis(self.retry_max_delay_ms),
            error_time: Duration::from_secs(self.error_time_secs),
        }
    }

    pub fn render_budget(&self) -> Duration {
        Duration::from_millis(self.render_budget_ms)
    }
}

impl Settings {
    fn validate(self) -> anyhow::Result<Self> {
        if self.metrics.source == MetricsSource::Http && self.metrics.endpoint.is_none() {
            anyhow::bail!("metrics.endpoint is required when metrics.source = \"http\"");
        }
        Ok(self)
    }
}

fn builder_with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("query.stale_time_secs", 300)?
        .set_default("query.retry", 3)?
        .set_default("query.retry_base_delay_ms", 1000)?
        .set_default("query.retry_max_delay_ms", 30_000)?
        .set_default("query.error_time_secs", 30)?
        .set_default("query.render_budget_ms", 2000)?
        .set_default("metrics.source", "mock")?
        .set_default("metrics.timeout_ms", 5000)?
        .set_default("log.filter", "info")?)
}

/// Defaults, then `config/dashboard.*` if present, then `CHIMERA__*` env vars
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("CHIMERA").separator("__"))
        .build()?;

    settings.try_deserialize::<Settings>()?.validate()
}

#[cfg(test)]
fn load_settings_from_toml(toml: &str) -> anyhow::Result<Settings> {
    let settings = builder_with_defaults()?
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    settings.try_deserialize::<Settings>()?.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = load_settings_from_toml("").unwrap();

        assert_eq!(settings.server.bind, "0.0.0.0:8080");
        assert_eq!(settings.metrics.source, MetricsSource::Mock);
        assert_eq!(settings.query.policy(), QueryPolicy::default());
        assert_eq!(settings.query.render_budget(), Duration::from_secs(2));
    }

    #[test]
    fn test_file_overrides() {
        let settings = load_settings_from_toml(
            r#"
            [query]
            stale_time_secs = 60
            retry = 1

            [metrics]
            source = "http"
            endpoint = "http://metrics.internal/api/dashboard"
            "#,
        )
        .unwrap();

        let policy = settings.query.policy();
        assert_eq!(policy.stale_time, Duration::from_secs(60));
        assert_eq!(policy.retry, 1);
        assert_eq!(settings.metrics.source, MetricsSource::Http);
        assert_eq!(settings.metrics.timeout_ms, 5000);
    }

    #[test]
    fn test_http_source_requires_endpoint() {
        let result = load_settings_from_toml("[metrics]\nsource = \"http\"\n");
        assert!(result.is_err());
    }
}
