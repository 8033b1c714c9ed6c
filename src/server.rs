use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::app_state::build_app_state;
use crate::config::ServerConfig;
use crate::core::client::provisioner_client::ProvisionerClient;
use crate::core::util::id_util::new_id;
use crate::routes::build_app;

/// Runs the HTTP server until Ctrl+C is received.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let instance_id = new_id();

    if config.dev {
        debug!(instance = %instance_id, "Using dev configuration");
    }

    let working_directory = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(e) => {
            error!(instance = %instance_id, "Unable to get current working directory: {}", e);
            "error getting working directory".to_string()
        }
    };

    info!(
        instance = %instance_id,
        workingdirectory = %working_directory,
        debug = config.debug,
        backend = %config.listen_addr,
        dev = config.dev,
        cloud_url = %config.cloud_url,
        "Starting Pillar"
    );

    let cloud_client = ProvisionerClient::new(&config.cloud_url, config.upstream_timeout)?;
    let app = build_app(build_app_state(Arc::new(cloud_client)));

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to listen on {}", config.listen_addr))?;
    info!(instance = %instance_id, addr = %config.listen_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("failed to serve")?;

    info!(instance = %instance_id, "Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
