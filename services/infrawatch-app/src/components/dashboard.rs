//! Dashboard screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::check_form::CheckForm;
use super::check_list::CheckList;
use super::Controller;
use crate::client::CheckApi;
use crate::config::AppConfig;
use crate::controller::DashboardController;
use crate::store::DashboardState;

/// Check list, creation form, and error banner
///
/// Loads the list on mount and refreshes it on the poll interval until the
/// screen is left.
#[component]
pub fn DashboardPage(config: AppConfig) -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let controller = DashboardController::new(CheckApi::from_config(&config), state);

    let initial = controller.clone();
    spawn_local(async move { initial.list_checks().await });

    start_polling(&config, controller.clone());

    let on_refresh = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move { controller.refresh().await });
        }
    };

    let error = move || state.with(|s| s.error.clone());

    view! {
        <main style="min-height: 100vh; background: #f8fafc; padding: 2rem; \
                     font-family: system-ui, sans-serif;">
            <header style="display: flex; justify-content: space-between; align-items: center; \
                           margin-bottom: 1.5rem;">
                <h1 style="margin: 0; font-size: 1.75rem;">"InfraWatch Dashboard"</h1>
                <div style="display: flex; gap: 0.75rem; align-items: center;">
                    <button
                        on:click=on_refresh
                        style="padding: 0.5rem 1rem; border: 1px solid #cbd5e1; \
                               border-radius: 0.5rem; background: white; cursor: pointer;"
                    >
                        "Refresh"
                    </button>
                    <A href="/">"Home"</A>
                </div>
            </header>

            {move || {
                error()
                    .map(|message| {
                        view! {
                            <div
                                role="alert"
                                style="margin-bottom: 1rem; padding: 0.75rem 1rem; color: #721c24; \
                                       background: #f8d7da; border: 1px solid #f5c6cb; border-radius: 0.5rem;"
                            >
                                {message}
                            </div>
                        }
                    })
            }}

            <CheckForm controller=controller.clone() />
            <CheckList controller=controller />
        </main>
    }
}

#[cfg(feature = "csr")]
fn start_polling(config: &AppConfig, controller: Controller) {
    use tokio_util::sync::CancellationToken;

    use crate::poll::poll_loop;

    let cancel = CancellationToken::new();
    let token = cancel.clone();

    spawn_local(poll_loop(
        config.poll_interval,
        token,
        gloo_timers::future::sleep,
        move || {
            let controller = controller.clone();
            spawn_local(async move { controller.list_checks().await });
        },
    ));

    on_cleanup(move || cancel.cancel());
}

// Without browser timers there is nothing to drive the loop
#[cfg(not(feature = "csr"))]
fn start_polling(_config: &AppConfig, _controller: Controller) {}
