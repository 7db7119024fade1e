//! Status badge component

use leptos::prelude::*;

use crate::api::CheckStatus;
use crate::format::badge_style;

/// A colored badge showing Healthy (green), Unhealthy (red), or Unknown (gray)
#[component]
pub fn StatusBadge(status: CheckStatus) -> impl IntoView {
    let (label, color, bg) = badge_style(status);

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span style=style data-status=status.to_string()>{label}</span>
    }
}
