use std::env;

#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    /// Base URL of the statistics service, up to and including `/api`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Total attempts per fetch, first try included.
    pub retry_attempts: u32,
    /// Backoff before the first retry; doubles per attempt.
    pub retry_backoff_ms: u64,
    pub cache_capacity: usize,
    /// Optional path for warm-start cache snapshots.
    pub cache_snapshot_path: Option<String>,
}

impl ExplorerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("BGO_API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout_secs: env::var("BGO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            retry_attempts: env::var("BGO_RETRY_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_attempts),
            retry_backoff_ms: env::var("BGO_RETRY_BACKOFF_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_backoff_ms),
            cache_capacity: env::var("BGO_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            cache_snapshot_path: env::var("BGO_CACHE_SNAPSHOT").ok(),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            request_timeout_secs: 30,
            retry_attempts: 3,
            retry_backoff_ms: 250,
            cache_capacity: 256,
            cache_snapshot_path: None,
        }
    }
}
