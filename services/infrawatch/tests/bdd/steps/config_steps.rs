//! BDD step definitions for loading host configuration

use std::io::Write;

use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use infrawatch::{load_config, HostError};

use crate::world::HostWorld;

#[given("a config file with:")]
fn config_file(world: &mut HostWorld, step: &Step) {
    let content = step.docstring.as_deref().expect("step needs a docstring");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    world.config_file = Some(file);
}

#[when("the config is loaded")]
fn config_loaded(world: &mut HostWorld) {
    let file = world.config_file.as_ref().expect("config file not set");
    let result = load_config(file.path()).and_then(|config| {
        config.validate()?;
        Ok(config)
    });
    world.loaded = Some(result);
}

fn loaded(world: &HostWorld) -> &infrawatch::Config {
    match world.loaded.as_ref().expect("config not loaded") {
        Ok(config) => config,
        Err(e) => panic!("config failed to load: {}", e),
    }
}

#[then(expr = "the listen port is {int}")]
fn listen_port(world: &mut HostWorld, port: u16) {
    assert_eq!(loaded(world).server.port, port);
}

#[then(expr = "the API base is {string}")]
fn api_base(world: &mut HostWorld, url: String) {
    assert_eq!(loaded(world).api_base_url, url);
}

#[then(expr = "the page title is {string}")]
fn page_title(world: &mut HostWorld, title: String) {
    assert_eq!(loaded(world).site.title, title);
}

#[then("loading fails with a configuration error")]
fn loading_fails(world: &mut HostWorld) {
    let result = world.loaded.as_ref().expect("config not loaded");
    assert!(
        matches!(result, Err(HostError::Config(_))),
        "expected a configuration error, got {:?}",
        result
    );
}
