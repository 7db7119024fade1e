//! Dashboard operations: the only code that talks to both the backend and the
//! view state

use crate::client::CheckApi;
use crate::store::{
    DashboardState, Store, CREATE_FALLBACK, DELETE_FALLBACK, SUMMARY_FALLBACK,
};

/// Drives the dashboard's backend calls and applies their results
#[derive(Debug, Clone)]
pub struct DashboardController<S> {
    api: CheckApi,
    store: S,
}

impl<S: Store> DashboardController<S> {
    pub fn new(api: CheckApi, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the check list and replace the displayed one
    pub async fn list_checks(&self) {
        let Some(ticket) = self.store.apply(DashboardState::begin_list) else {
            return;
        };

        let result = self.api.list_checks().await;
        match &result {
            Ok(checks) => tracing::debug!("List {} returned {} checks", ticket, checks.len()),
            Err(e) => tracing::warn!("List {} failed: {}", ticket, e),
        }

        self.store.apply(|state| state.finish_list(ticket, result));
    }

    /// Manual refresh button
    pub async fn refresh(&self) {
        self.list_checks().await;
    }

    /// Submit the current draft
    pub async fn create_check(&self) {
        let Some(request) = self.store.inspect(|state| state.draft.to_request()) else {
            return;
        };

        tracing::debug!(
            "Creating check '{}' for {} every {}ms",
            request.name,
            request.url,
            request.interval_ms
        );

        match self.api.create_check(&request).await {
            Ok(created) => {
                match created {
                    Some(check) => tracing::info!("Created check '{}' ({})", check.name, check.id),
                    None => tracing::info!("Created check '{}'", request.name),
                }
                if self.store.apply(DashboardState::creation_succeeded).is_none() {
                    return;
                }
                self.list_checks().await;
            }
            Err(e) => {
                tracing::warn!("Failed to create check '{}': {}", request.name, e);
                self.store
                    .apply(|state| state.record_error(&e, CREATE_FALLBACK));
            }
        }
    }

    /// Fetch and cache the uptime summary for one check
    pub async fn fetch_summary(&self, id: &str) {
        match self.api.fetch_summary(id).await {
            Ok(summary) => {
                self.store.apply(|state| state.store_summary(id, summary));
            }
            Err(e) => {
                tracing::warn!("Failed to fetch summary for {}: {}", id, e);
                self.store
                    .apply(|state| state.record_error(&e, SUMMARY_FALLBACK));
            }
        }
    }

    /// Open a card's uptime summary, fetching it the first time
    pub async fn reveal_summary(&self, id: &str) {
        let Some(needs_fetch) = self.store.apply(|state| state.reveal_summary(id)) else {
            return;
        };
        if needs_fetch {
            self.fetch_summary(id).await;
        }
    }

    /// Delete a check, then re-fetch the list whatever the outcome
    pub async fn delete_check(&self, id: &str) {
        let result = self.api.delete_check(id).await;
        if let Err(e) = &result {
            tracing::warn!("Failed to delete check {}: {}", id, e);
        }

        self.list_checks().await;

        if let Err(e) = result {
            self.store
                .apply(|state| state.record_error(&e, DELETE_FALLBACK));
        }
    }
}
