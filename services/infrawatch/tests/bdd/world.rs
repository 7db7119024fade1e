//! BDD test world for the dashboard host

use cucumber::World;
use infrawatch::Config;
use tempfile::{NamedTempFile, TempDir};

#[derive(Debug, Default, World)]
pub struct HostWorld {
    pub config: Config,

    // Site serving
    pub site_dir: Option<TempDir>,
    pub response_status: Option<u16>,
    pub response_body: Option<String>,

    // Config loading
    pub config_file: Option<NamedTempFile>,
    pub loaded: Option<infrawatch::Result<Config>>,
}
