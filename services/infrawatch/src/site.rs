//! Routes serving the dashboard shell and its wasm bundle

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::Config;

/// Name of the meta tag the front-end reads its backend URL from
pub const API_BASE_META_NAME: &str = "infrawatch-api-base";

#[derive(Clone)]
struct SiteState {
    shell: Arc<str>,
}

/// Build the host's axum router
///
/// The shell is rendered once here; both SPA entry paths return the same page
/// and the client-side router picks the screen.
pub fn build_router(config: &Config) -> Router {
    let shell = render_shell(&config.site.title, &config.api_base_url);
    let pkg_dir = config.site.root.join("pkg");
    tracing::debug!("Serving bundle from {:?}", pkg_dir);

    Router::new()
        .route("/", get(shell_handler))
        .route("/dashboard", get(shell_handler))
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .with_state(SiteState {
            shell: shell.into(),
        })
}

async fn shell_handler(State(site): State<SiteState>) -> impl IntoResponse {
    Html(site.shell.to_string())
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// HTML page that loads the wasm bundle and mounts the app
pub fn render_shell(title: &str, api_base_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="{}" content="{}">
    <title>{}</title>
    <script type="module">
        import init, {{ mount }} from '/pkg/infrawatch_app.js';
        init().then(() => mount());
    </script>
</head>
<body></body>
</html>
"#,
        API_BASE_META_NAME,
        html_escape::encode_double_quoted_attribute(api_base_url),
        html_escape::encode_text(title)
    )
}
