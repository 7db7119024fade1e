//! InfraWatch host
//!
//! Serves the dashboard's HTML shell and wasm bundle, telling the page which
//! backend to talk to.

pub mod config;
pub mod error;
pub mod site;

pub use config::{load_config, Config};
pub use error::{HostError, Result};

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Run the host until ctrl-c
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;

    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| HostError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    serve(listener, &config, cancel).await
}

/// Serve on an already bound listener until `cancel` fires
pub async fn serve(listener: TcpListener, config: &Config, cancel: CancellationToken) -> Result<()> {
    let router = site::build_router(config);
    tracing::info!(
        "Dashboard listening on http://{} (backend {})",
        listener.local_addr()?,
        config.api_base_url
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Dashboard host stopped");
    Ok(())
}
