//! BDD step definitions for serving the dashboard

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use infrawatch::site::build_router;

use crate::world::HostWorld;

#[given(expr = "a host configured with API base {string}")]
fn host_with_api_base(world: &mut HostWorld, url: String) {
    world.config.api_base_url = url;
}

#[given(expr = "a host titled {string}")]
fn host_with_title(world: &mut HostWorld, title: String) {
    world.config.site.title = title;
}

#[given(expr = "the site root contains {string} with content {string}")]
fn site_root_file(world: &mut HostWorld, relative: String, content: String) {
    let dir = world
        .site_dir
        .get_or_insert_with(|| tempfile::tempdir().expect("failed to create site dir"));
    let path = dir.path().join(&relative);
    std::fs::create_dir_all(path.parent().expect("file has a parent")).unwrap();
    std::fs::write(&path, content).unwrap();
    world.config.site.root = dir.path().to_path_buf();
}

#[when(expr = "{string} is requested")]
async fn request_path(world: &mut HostWorld, uri: String) {
    let response = build_router(&world.config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status is {int}")]
fn response_status(world: &mut HostWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response body is {string}")]
fn response_body(world: &mut HostWorld, expected: String) {
    assert_eq!(world.response_body.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the response body contains {string}")]
fn response_body_contains(world: &mut HostWorld, expected: String) {
    let body = world.response_body.as_deref().expect("no response");
    assert!(body.contains(&expected), "{:?} not found in:\n{}", expected, body);
}
