//! Form for adding a check

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Controller;
use crate::config::MIN_INTERVAL_MS;

const INPUT_STYLE: &str = "padding: 0.5rem 0.75rem; border: 1px solid #cbd5e1; \
                           border-radius: 0.5rem; font-size: 0.95rem;";

#[component]
pub fn CheckForm(controller: Controller) -> impl IntoView {
    let state = *controller.store();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move { controller.create_check().await });
    };

    view! {
        <form
            on:submit=on_submit
            style="display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center; \
                   margin-bottom: 1.5rem; padding: 1rem; background: white; \
                   border: 1px solid #e2e8f0; border-radius: 0.75rem;"
        >
            <input
                type="text"
                name="name"
                placeholder="Name"
                style=INPUT_STYLE
                prop:value=move || state.with(|s| s.draft.name.clone())
                on:input=move |ev| state.update(|s| s.draft.name = event_target_value(&ev))
            />
            <input
                type="text"
                name="url"
                placeholder="https://example.com/health"
                style=INPUT_STYLE
                prop:value=move || state.with(|s| s.draft.url.clone())
                on:input=move |ev| state.update(|s| s.draft.url = event_target_value(&ev))
            />
            <input
                type="number"
                name="interval"
                min=MIN_INTERVAL_MS.to_string()
                step="1000"
                title="Check interval in milliseconds"
                style=INPUT_STYLE
                prop:value=move || state.with(|s| s.draft.interval.clone())
                on:input=move |ev| state.update(|s| s.draft.interval = event_target_value(&ev))
            />
            <button
                type="submit"
                style="background: #e11d48; color: white; padding: 0.5rem 1rem; border: none; \
                       border-radius: 0.5rem; font-weight: 600; cursor: pointer;"
            >
                "Add Check"
            </button>
        </form>
    }
}
