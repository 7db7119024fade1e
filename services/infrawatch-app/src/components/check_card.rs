//! One monitored endpoint

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::status_badge::StatusBadge;
use super::Controller;
use crate::api::Check;
use crate::format::{interval_label, latency_label};
use crate::store::DashboardState;

const BUTTON_STYLE: &str = "padding: 0.35rem 0.75rem; border: 1px solid #cbd5e1; \
                            border-radius: 0.5rem; background: white; cursor: pointer;";

/// Summary line for one card, present once revealed and fetched
pub fn summary_memo(state: RwSignal<DashboardState>, id: String) -> Memo<Option<String>> {
    Memo::new(move |_| state.with(|s| s.revealed_summary(&id)))
}

/// Card with the check's status, target, interval, and actions
///
/// Whether the uptime summary is open lives in the dashboard state, so it
/// survives the card being rebuilt by a list refresh.
#[component]
pub fn CheckCard(check: Check, controller: Controller) -> impl IntoView {
    let summary = summary_memo(*controller.store(), check.id.clone());

    let on_reveal = {
        let controller = controller.clone();
        let id = check.id.clone();
        move |_| {
            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move { controller.reveal_summary(&id).await });
        }
    };

    let on_delete = {
        let id = check.id.clone();
        move |_| {
            let controller = controller.clone();
            let id = id.clone();
            spawn_local(async move { controller.delete_check(&id).await });
        }
    };

    view! {
        <article style="padding: 1rem; background: white; border: 1px solid #e2e8f0; \
                        border-radius: 0.75rem; display: flex; flex-direction: column; gap: 0.4rem;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h3 style="margin: 0; font-size: 1.1rem;">{check.name.clone()}</h3>
                <StatusBadge status=check.status() />
            </div>
            <p style="margin: 0; color: #475569; word-break: break-all;">{check.url.clone()}</p>
            <p style="margin: 0; font-size: 0.875rem; color: #64748b;">
                {interval_label(check.interval_ms)}
            </p>
            {check
                .last_latency_ms
                .map(|ms| {
                    view! {
                        <p style="margin: 0; font-size: 0.875rem; color: #64748b;">
                            {latency_label(ms)}
                        </p>
                    }
                })}
            <div style="display: flex; gap: 0.5rem; margin-top: 0.5rem;">
                <button style=BUTTON_STYLE on:click=on_reveal>"Uptime (24h)"</button>
                <button style=BUTTON_STYLE on:click=on_delete>"Delete"</button>
            </div>
            {move || {
                summary
                    .get()
                    .map(|text| {
                        view! { <p style="margin: 0; font-size: 0.875rem; color: #0f172a;">{text}</p> }
                    })
            }}
        </article>
    }
}
