//! InfraWatch dashboard
//!
//! Browser client for a health-check backend: lists monitored endpoints with
//! their last status, creates and deletes checks, and shows 24-hour uptime
//! summaries. Everything except the components builds natively so the
//! dashboard logic is tested without a browser.

pub mod api;
pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod format;
pub mod io;
pub mod poll;
pub mod store;

pub use app::App;
pub use config::AppConfig;
pub use error::{ApiError, Result};

/// Entry point called by the page's module script
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    tracing::info!("Using backend at {}", config.api_base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
