use leptos::prelude::*;

use super::check_card::CheckCard;
use super::Controller;
use crate::api::Check;
use crate::store::{DashboardState, ListDisplay};

/// What the list area reads from the dashboard state
///
/// Memos only notify when their value changes, so draft edits, summary
/// writes and in-flight polls leave the cards alone.
pub fn list_memos(state: RwSignal<DashboardState>) -> (Memo<ListDisplay>, Memo<Vec<Check>>) {
    let display = Memo::new(move |_| state.with(DashboardState::list_display));
    let checks = Memo::new(move |_| state.with(|s| s.checks.clone()));
    (display, checks)
}

/// Skeleton on first load, empty message, or one card per check
#[component]
pub fn CheckList(controller: Controller) -> impl IntoView {
    let (display, checks) = list_memos(*controller.store());

    move || match display.get() {
        ListDisplay::Skeleton => view! { <Skeleton /> }.into_any(),
        ListDisplay::Empty => view! {
            <p style="color: #64748b; text-align: center; padding: 2rem 0;">
                "No checks yet. Add one above."
            </p>
        }
        .into_any(),
        ListDisplay::Cards => {
            let controller = controller.clone();
            view! {
                <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem;">
                    {move || {
                        checks
                            .get()
                            .into_iter()
                            .map(|check| view! { <CheckCard check=check controller=controller.clone() /> })
                            .collect_view()
                    }}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Skeleton() -> impl IntoView {
    view! {
        <div aria-busy="true" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem;">
            {(0..3)
                .map(|_| {
                    view! {
                        <div style="height: 9rem; border-radius: 0.75rem; background: #e2e8f0;"></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
