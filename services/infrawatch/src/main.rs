//! InfraWatch CLI
//!
//! Command-line interface for the dashboard host.

use std::path::PathBuf;

use clap::Parser;
use infrawatch::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "infrawatch")]
#[command(about = "Serves the InfraWatch health check dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Base URL of the health-check backend (overrides config file)
    #[arg(long, env = "INFRAWATCH_API_URL")]
    api_base_url: Option<String>,

    /// Directory containing the built `pkg/` bundle (overrides config file)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, api_base_url={:?}, site_root={:?}, log_level={:?}",
        args.config,
        args.port,
        args.api_base_url,
        args.site_root,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(api_base_url) = args.api_base_url {
        config.api_base_url = api_base_url;
    }
    if let Some(site_root) = args.site_root {
        config.site.root = site_root;
    }

    tracing::info!("Starting InfraWatch host");
    infrawatch::run(config).await?;

    Ok(())
}
