//! Landing screen

use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "Uptime Monitoring",
        "#fb923c",
        "Track the health of your services with auto-checks and status updates.",
    ),
    (
        "Alert Summaries",
        "#fb7185",
        "View 24-hour uptime percentages and receive real-time status changes.",
    ),
    (
        "Simple Setup",
        "#34d399",
        "Add new checks instantly with custom URLs and check intervals.",
    ),
];

/// Static marketing page with a single way into the dashboard
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main style="min-height: 100vh; background: #020617; color: white; display: flex; \
                     flex-direction: column; align-items: center; justify-content: center; \
                     padding: 0 1.5rem; font-family: system-ui, sans-serif;">
            <div style="text-align: center; max-width: 42rem;">
                <h1 style="font-size: 3rem; font-weight: 800; margin-bottom: 1rem; color: #f97316;">
                    "Welcome to InfraWatch"
                </h1>
                <p style="font-size: 1.125rem; color: #94a3b8; margin-bottom: 1.5rem;">
                    "Real-time monitoring for your cloud services. Uptime summaries, service checks, \
                     and performance insights in one place."
                </p>
                <A href="/dashboard">
                    <button style="background: #e11d48; color: white; padding: 0.75rem 1.5rem; \
                                   border: none; border-radius: 0.75rem; font-weight: 600; cursor: pointer;">
                        "Enter Dashboard"
                    </button>
                </A>
            </div>

            <section style="margin-top: 4rem; display: grid; grid-template-columns: repeat(3, 1fr); \
                            gap: 1.5rem; text-align: center; max-width: 56rem; width: 100%;">
                {FEATURES
                    .into_iter()
                    .map(|(title, accent, blurb)| {
                        view! {
                            <div style="padding: 1.5rem; background: rgba(255,255,255,0.05); \
                                        border: 1px solid rgba(255,255,255,0.1); border-radius: 0.75rem;">
                                <h3 style=format!("font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; color: {};", accent)>
                                    {title}
                                </h3>
                                <p style="font-size: 0.875rem; color: #94a3b8;">{blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <footer style="margin-top: 5rem; font-size: 0.75rem; color: #64748b;">
                "Built by Petera M."
            </footer>
        </main>
    }
}
