//! Text shown on check cards

use crate::api::{CheckStatus, Summary};

/// Badge text and colours (foreground, background) for a status
pub fn badge_style(status: CheckStatus) -> (&'static str, &'static str, &'static str) {
    match status {
        CheckStatus::Healthy => ("Healthy", "#155724", "#d4edda"),
        CheckStatus::Unhealthy => ("Unhealthy", "#721c24", "#f8d7da"),
        CheckStatus::Unknown => ("Unknown", "#383d41", "#e2e3e5"),
    }
}

pub fn interval_label(interval_ms: u64) -> String {
    format!("Every {}s", interval_ms as f64 / 1000.0)
}

pub fn latency_label(latency_ms: f64) -> String {
    format!("Last latency: {}ms", latency_ms)
}

pub fn summary_label(summary: &Summary) -> String {
    format!(
        "Uptime: {}% · Checks: {} · Up: {}",
        summary.uptime_pct, summary.total_checks, summary.up
    )
}
