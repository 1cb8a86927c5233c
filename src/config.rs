use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENGINE: &str = "google.com";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:108.0) Gecko/20100101 Firefox/108.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub engine: String,
    /// Upstream result pages fetched per search, starting at page 0.
    pub upstream_pages: usize,
    /// Results requested from the engine per upstream page.
    pub results_per_upstream_page: usize,
    /// Size of the pages handed out by the resulting `ResultSet`.
    pub page_size: usize,
    /// Upstream fetches in flight at once.
    pub concurrency: usize,
    /// Minimum spacing between two requests of the same fetcher.
    pub request_delay: Duration,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            upstream_pages: 5,
            results_per_upstream_page: 10,
            page_size: 10,
            concurrency: 1,
            request_delay: Duration::from_millis(200),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
