//! Wire types for the InfraWatch backend
//!
//! These mirror the JSON the backend sends and accepts. The client never
//! derives state from them; it only displays what came back.

use serde::{Deserialize, Serialize};

use crate::config::EXPECTED_STATUS;

/// A health check as returned by `GET /api/checks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub interval_ms: u64,
    #[serde(default = "default_expected_status")]
    pub expected_status: u16,
    #[serde(default)]
    pub last_status: Option<String>,
    #[serde(default)]
    pub last_latency_ms: Option<f64>,
}

impl Check {
    pub fn status(&self) -> CheckStatus {
        CheckStatus::classify(self.last_status.as_deref())
    }
}

fn default_expected_status() -> u16 {
    EXPECTED_STATUS
}

/// Health classification shown on a check's badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Healthy,
    Unhealthy,
    Unknown,
}

impl CheckStatus {
    /// Only the exact strings "healthy" and "unhealthy" are recognised
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some("healthy") => CheckStatus::Healthy,
            Some("unhealthy") => CheckStatus::Unhealthy,
            _ => CheckStatus::Unknown,
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Healthy => write!(f, "healthy"),
            CheckStatus::Unhealthy => write!(f, "unhealthy"),
            CheckStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Request body for `POST /api/checks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCheck {
    pub name: String,
    pub url: String,
    pub interval_ms: u64,
    pub expected_status: u16,
}

/// 24-hour uptime summary as returned by `GET /api/checks/{id}/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub uptime_pct: f64,
    pub total_checks: u64,
    pub up: u64,
}

/// Error body the backend sends with a non-2xx status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
