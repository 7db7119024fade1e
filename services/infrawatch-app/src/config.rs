//! Startup configuration for the dashboard
//!
//! Built once when the app mounts and handed to the screens as a prop.

use std::time::Duration;

/// Backend used when no override is supplied
pub const DEFAULT_API_BASE_URL: &str = "https://infrawatch-api.onrender.com";

/// Name of the `<meta>` tag the host service injects into the page shell
pub const API_BASE_META_NAME: &str = "infrawatch-api-base";

/// How often the dashboard re-fetches the check list
pub const POLL_INTERVAL: Duration = Duration::from_millis(15_000);

/// Interval submitted when the form input is missing or invalid
pub const DEFAULT_INTERVAL_MS: u64 = 30_000;

/// Smallest interval the form will submit
pub const MIN_INTERVAL_MS: u64 = 10_000;

/// Expected HTTP status sent with every new check
pub const EXPECTED_STATUS: u16 = 200;

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            poll_interval: POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Pick the backend URL from the page override, then the build-time
    /// override, then the default. Blank values are skipped.
    pub fn resolve(page_override: Option<&str>, build_override: Option<&str>) -> Self {
        let base = [page_override, build_override]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        tracing::debug!("Resolved API base URL: {}", base);
        Self::new(base)
    }

    /// Resolve against `INFRAWATCH_API_URL` captured at compile time
    pub fn from_overrides(page_override: Option<&str>) -> Self {
        Self::resolve(page_override, option_env!("INFRAWATCH_API_URL"))
    }

    /// Read the override from the page shell's meta tag
    #[cfg(feature = "csr")]
    pub fn from_document() -> Self {
        let page_override = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META_NAME))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        Self::from_overrides(page_override.as_deref())
    }
}
