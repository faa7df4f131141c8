// Keyed query cache with a staleness window and a fixed retry policy
use crate::application::metrics_repository::FetchError;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPolicy {
    /// How long a successful result is served without re-fetching
    pub stale_time: Duration,
    /// Retries after the first failed attempt
    pub retry: u32,
    pub retry_base_delay: Duration,
    pub retry_max_delay: Duration,
    /// How long a failure that exhausted its retries is reported before the
    /// next read starts a new fetch
    pub error_time: Duration,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            retry: 3,
            retry_base_delay: Duration::from_secs(1),
            retry_max_delay: Duration::from_secs(30),
            error_time: Duration::from_secs(30),
        }
    }
}

impl QueryPolicy {
    /// Backoff before retry number `attempt` (0-based): the base delay doubled
    /// per attempt, capped at `retry_max_delay`.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.retry_base_delay
            .saturating_mul(factor)
            .min(self.retry_max_delay)
    }
}

/// What a view sees of a query at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Error,
    Ready(T),
}

struct CachedValue<T> {
    value: T,
    fetched_at: Instant,
}

struct FailedFetch {
    error: FetchError,
    failed_at: Instant,
}

/// Last success and last failure recorded for one key.
struct Entry<T> {
    value: Option<CachedValue<T>>,
    failure: Option<FailedFetch>,
}

type Slot<T> = Arc<Mutex<Entry<T>>>;

/// Process-wide cache of query results.
///
/// Each key owns an async mutex held for the whole fetch, so at most one
/// fetch per key is in flight. Callers arriving meanwhile wait and then read
/// its outcome: the stored value on success, the recorded error on failure.
pub struct QueryCache<T> {
    policy: QueryPolicy,
    slots: Mutex<HashMap<String, Slot<T>>>,
}

impl<T: Clone + Send + 'static> QueryCache<T> {
    pub fn new(policy: QueryPolicy) -> Self {
        Self {
            policy,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key` while it is fresh, otherwise run
    /// `fetcher` (with retries) and cache its result.
    ///
    /// A fetch that fails after its retries is reported to every reader for
    /// `error_time` without fetching again. A failed refresh leaves any
    /// previous value in place but still surfaces the error.
    pub async fn fetch<F, Fut>(&self, key: &str, fetcher: F) -> Result<T, FetchError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let slot = self.slot(key).await;
        let mut entry = slot.lock().await;

        if let Some(cached) = entry.value.as_ref() {
            if cached.fetched_at.elapsed() < self.policy.stale_time {
                tracing::debug!(key, "serving cached query result");
                return Ok(cached.value.clone());
            }
        }

        if let Some(failure) = entry.failure.as_ref() {
            if failure.failed_at.elapsed() < self.policy.error_time {
                tracing::debug!(key, "serving recorded query failure");
                return Err(failure.error.clone());
            }
        }

        match self.fetch_with_retry(key, &fetcher).await {
            Ok(value) => {
                entry.value = Some(CachedValue {
                    value: value.clone(),
                    fetched_at: Instant::now(),
                });
                entry.failure = None;
                Ok(value)
            }
            Err(error) => {
                entry.failure = Some(FailedFetch {
                    error: error.clone(),
                    failed_at: Instant::now(),
                });
                Err(error)
            }
        }
    }

    async fn slot(&self, key: &str) -> Slot<T> {
        let mut slots = self.slots.lock().await;
        slots
            .entry(key.to_string())
            .or_insert_with(|| {
                Arc::new(Mutex::new(Entry {
                    value: None,
                    failure: None,
                }))
            })
            .clone()
    }

    async fn fetch_with_retry<F, Fut>(&self, key: &str, fetcher: &F) -> Result<T, FetchError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 0;
        loop {
            match fetcher().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.policy.retry => {
                    let delay = self.policy.retry_delay(attempt);
                    tracing::warn!(
                        key,
                        attempt = attempt + 1,
                        ?delay,
                        error = %e,
                        "query failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::warn!(key, attempts = attempt + 1, error = %e, "query failed");
                    return Err(e);
                }
            }
        }
    }
}
