//! Creation form draft

use crate::api::NewCheck;
use crate::config::{DEFAULT_INTERVAL_MS, EXPECTED_STATUS, MIN_INTERVAL_MS};

/// Client-local input for a new check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDraft {
    pub name: String,
    pub url: String,
    /// Raw text of the interval input, in milliseconds
    pub interval: String,
}

impl Default for CheckDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            interval: DEFAULT_INTERVAL_MS.to_string(),
        }
    }
}

impl CheckDraft {
    pub fn interval_ms(&self) -> u64 {
        normalize_interval(&self.interval)
    }

    /// Body for `POST /api/checks`
    pub fn to_request(&self) -> NewCheck {
        NewCheck {
            name: self.name.clone(),
            url: self.url.clone(),
            interval_ms: self.interval_ms(),
            expected_status: EXPECTED_STATUS,
        }
    }
}

/// Interval to submit for the given input
///
/// Empty, non-numeric, zero and negative input becomes the default; any other
/// value is truncated to whole milliseconds and held at the floor.
pub fn normalize_interval(input: &str) -> u64 {
    match input.trim().parse::<f64>() {
        Ok(ms) if ms.is_finite() && ms > 0.0 => (ms as u64).max(MIN_INTERVAL_MS),
        _ => DEFAULT_INTERVAL_MS,
    }
}
