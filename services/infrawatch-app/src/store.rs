//! Dashboard view state and the store that owns it
//!
//! Every mutation is a method on [`DashboardState`], applied through a
//! [`Store`]. List responses are ordered by ticket: a response is applied only
//! if no newer list response has been applied already.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use leptos::prelude::{RwSignal, Update, With};

use crate::api::{Check, Summary};
use crate::error::ApiError;
use crate::form::CheckDraft;
use crate::format::summary_label;

pub const LIST_FALLBACK: &str = "Failed to load checks";
pub const CREATE_FALLBACK: &str = "Failed to create check";
pub const SUMMARY_FALLBACK: &str = "Failed to load summary";
pub const DELETE_FALLBACK: &str = "Failed to delete check";

/// Identifies one list request
pub type Ticket = u64;

/// Everything the dashboard screen displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub checks: Vec<Check>,
    pub loading: bool,
    pub draft: CheckDraft,
    pub summaries: HashMap<String, Summary>,
    /// Checks whose uptime summary the user has opened
    pub revealed: HashSet<String>,
    pub error: Option<String>,
    issued: Ticket,
    applied: Ticket,
}

impl DashboardState {
    /// Record a new list request and return its ticket
    pub fn begin_list(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Apply a list response. Returns false if a newer response already won.
    pub fn finish_list(&mut self, ticket: Ticket, result: Result<Vec<Check>, ApiError>) -> bool {
        if ticket == self.issued {
            self.loading = false;
        }

        if ticket <= self.applied {
            tracing::debug!(
                "Dropping list response {} (already applied {})",
                ticket,
                self.applied
            );
            return false;
        }
        self.applied = ticket;

        match result {
            Ok(checks) => {
                self.checks = checks;
                self.error = None;
            }
            Err(e) => {
                self.checks.clear();
                self.error = Some(e.user_message(LIST_FALLBACK));
            }
        }
        true
    }

    /// Most recently issued list ticket
    pub fn latest_ticket(&self) -> Ticket {
        self.issued
    }

    pub fn creation_succeeded(&mut self) {
        self.draft = CheckDraft::default();
    }

    pub fn store_summary(&mut self, id: &str, summary: Summary) {
        self.summaries.insert(id.to_string(), summary);
    }

    pub fn summary(&self, id: &str) -> Option<&Summary> {
        self.summaries.get(id)
    }

    /// Mark a check's summary as open. Returns true if it still has to be
    /// fetched.
    pub fn reveal_summary(&mut self, id: &str) -> bool {
        self.revealed.insert(id.to_string());
        !self.summaries.contains_key(id)
    }

    /// Summary text for an open card, once it has arrived
    pub fn revealed_summary(&self, id: &str) -> Option<String> {
        if !self.revealed.contains(id) {
            return None;
        }
        self.summary(id).map(summary_label)
    }

    /// What the check list area shows. Cards stay up while a refresh is in
    /// flight; the skeleton only covers a load with nothing to show yet.
    pub fn list_display(&self) -> ListDisplay {
        match (self.loading, self.checks.is_empty()) {
            (_, false) => ListDisplay::Cards,
            (true, true) => ListDisplay::Skeleton,
            (false, true) => ListDisplay::Empty,
        }
    }

    pub fn record_error(&mut self, error: &ApiError, fallback: &str) {
        self.error = Some(error.user_message(fallback));
    }
}

/// Content of the check list area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDisplay {
    Skeleton,
    Empty,
    Cards,
}

/// Single owner of a [`DashboardState`]
///
/// Both methods return `None` once the owner is gone, e.g. after the
/// dashboard has been unmounted.
pub trait Store: Clone + Send + Sync + 'static {
    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R>;

    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R>;
}

impl Store for RwSignal<DashboardState> {
    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.try_with(f)
    }
}

/// Store for use outside the reactive runtime
pub type SharedStore = Arc<Mutex<DashboardState>>;

impl Store for SharedStore {
    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        self.lock().ok().map(|mut state| f(&mut state))
    }

    fn inspect<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        self.lock().ok().map(|state| f(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(id: &str) -> Check {
        Check {
            id: id.to_string(),
            name: format!("check-{}", id),
            url: "https://x".to_string(),
            interval_ms: 30000,
            expected_status: 200,
            last_status: None,
            last_latency_ms: None,
        }
    }

    fn network_error() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }

    #[test]
    fn initial_state_is_empty() {
        let state = DashboardState::default();
        assert!(state.checks.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.draft, CheckDraft::default());
    }

    #[test]
    fn successful_list_replaces_checks_and_clears_error() {
        let mut state = DashboardState {
            error: Some("old".to_string()),
            ..Default::default()
        };

        let ticket = state.begin_list();
        assert!(state.loading);
        assert!(state.finish_list(ticket, Ok(vec![check("1")])));

        assert!(!state.loading);
        assert_eq!(state.checks, vec![check("1")]);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_list_clears_checks_and_records_error() {
        let mut state = DashboardState::default();
        let ticket = state.begin_list();
        state.finish_list(ticket, Ok(vec![check("1")]));

        let ticket = state.begin_list();
        state.finish_list(ticket, Err(network_error()));

        assert!(state.checks.is_empty());
        assert_eq!(state.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn failed_list_without_message_uses_fallback() {
        let mut state = DashboardState::default();
        let ticket = state.begin_list();
        state.finish_list(
            ticket,
            Err(ApiError::Status {
                status: 500,
                message: None,
            }),
        );
        assert_eq!(state.error.as_deref(), Some(LIST_FALLBACK));
    }

    #[test]
    fn overtaken_response_is_dropped() {
        let mut state = DashboardState::default();
        let first = state.begin_list();
        let second = state.begin_list();

        assert!(state.finish_list(second, Ok(vec![check("new")])));
        assert!(!state.finish_list(first, Ok(vec![check("old")])));

        assert_eq!(state.checks, vec![check("new")]);
        assert!(!state.loading);
    }

    #[test]
    fn older_response_applies_when_it_arrives_first() {
        let mut state = DashboardState::default();
        let first = state.begin_list();
        let second = state.begin_list();

        assert!(state.finish_list(first, Ok(vec![check("old")])));
        assert!(state.loading, "newest request still in flight");
        assert_eq!(state.checks, vec![check("old")]);

        assert!(state.finish_list(second, Ok(vec![check("new")])));
        assert!(!state.loading);
        assert_eq!(state.checks, vec![check("new")]);
    }

    #[test]
    fn overtaken_failure_does_not_clear_newer_list() {
        let mut state = DashboardState::default();
        let first = state.begin_list();
        let second = state.begin_list();

        state.finish_list(second, Ok(vec![check("1")]));
        state.finish_list(first, Err(network_error()));

        assert_eq!(state.checks, vec![check("1")]);
        assert!(state.error.is_none());
    }

    #[test]
    fn creation_success_resets_draft() {
        let mut state = DashboardState::default();
        state.draft.name = "API".to_string();
        state.draft.url = "https://x".to_string();
        state.draft.interval = "60000".to_string();

        state.creation_succeeded();

        assert_eq!(state.draft.name, "");
        assert_eq!(state.draft.url, "");
        assert_eq!(state.draft.interval, "30000");
    }

    #[test]
    fn summaries_are_cached_by_id() {
        let mut state = DashboardState::default();
        let summary = Summary {
            uptime_pct: 99.5,
            total_checks: 200,
            up: 199,
        };
        state.store_summary("1", summary.clone());

        assert_eq!(state.summary("1"), Some(&summary));
        assert!(state.summary("2").is_none());
    }

    #[test]
    fn first_reveal_needs_fetch_later_ones_use_cache() {
        let mut state = DashboardState::default();
        assert!(state.reveal_summary("1"));
        assert_eq!(state.revealed_summary("1"), None);

        state.store_summary(
            "1",
            Summary {
                uptime_pct: 99.5,
                total_checks: 200,
                up: 199,
            },
        );
        assert_eq!(
            state.revealed_summary("1").as_deref(),
            Some("Uptime: 99.5% · Checks: 200 · Up: 199")
        );
        assert!(!state.reveal_summary("1"));
    }

    #[test]
    fn cached_summary_stays_hidden_until_revealed() {
        let mut state = DashboardState::default();
        state.store_summary(
            "1",
            Summary {
                uptime_pct: 100.0,
                total_checks: 1,
                up: 1,
            },
        );
        assert_eq!(state.revealed_summary("1"), None);
    }

    #[test]
    fn skeleton_only_while_nothing_is_shown() {
        let mut state = DashboardState::default();
        assert_eq!(state.list_display(), ListDisplay::Empty);

        let ticket = state.begin_list();
        assert_eq!(state.list_display(), ListDisplay::Skeleton);
        state.finish_list(ticket, Ok(vec![check("1")]));
        assert_eq!(state.list_display(), ListDisplay::Cards);

        state.begin_list();
        assert_eq!(state.list_display(), ListDisplay::Cards, "poll keeps cards up");
    }

    #[test]
    fn shared_store_applies_and_reads() {
        let store: SharedStore = Arc::new(Mutex::new(DashboardState::default()));
        let ticket = store.apply(DashboardState::begin_list).unwrap();
        assert_eq!(ticket, 1);
        assert_eq!(store.inspect(|s| s.latest_ticket()), Some(1));
    }
}
