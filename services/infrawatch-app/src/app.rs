//! Root component and routes

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::config::AppConfig;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="InfraWatch" />
        <Router>
            <Routes fallback=|| view! { <p style="padding: 2rem;">"Page not found."</p> }>
                <Route path=path!("/") view=LandingPage />
                <Route
                    path=path!("/dashboard")
                    view=move || view! { <DashboardPage config=config.clone() /> }
                />
            </Routes>
        </Router>
    }
}
