// Application layer - Use cases and the shared query cache
pub mod dashboard_service;
pub mod metrics_repository;
pub mod query_cache;
