use std::future::Future;
use std::sync::Arc;

use kalidocker_api::{ApiServer, EnvDependencyProbe};
use kalidocker_telemetry::{GlobalContextGuard, LoggingConfig, Metrics};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Entry point for the KaliDocker boot sequence.
///
/// # Errors
///
/// Returns an error if configuration is invalid, telemetry cannot be
/// installed, or the server fails to bind or serve.
pub async fn run_app() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let logging = LoggingConfig {
        format: config.log_format,
        ..LoggingConfig::default()
    };
    kalidocker_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;
    run_app_with(config, shutdown_signal()).await
}

/// Wire and serve from an already-loaded configuration. Logging must be installed by the caller.
pub(crate) async fn run_app_with<F>(config: AppConfig, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let _context = GlobalContextGuard::new("bootstrap");

    info!("KaliDocker bootstrap starting");

    let telemetry =
        Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;
    let probe = Arc::new(EnvDependencyProbe::new(config.docker.clone()));
    info!(docker = ?probe.docker_endpoint(), "dependency probe configured");

    match &config.ui_dir {
        Some(dir) => info!(ui_dir = %dir.display(), "serving dashboard bundle"),
        None => warn!("no dashboard directory configured; serving /api routes only"),
    }

    let api = ApiServer::new(probe, telemetry, config.ui_dir.clone())
        .map_err(|err| AppError::api_server("api_server.new", err))?;
    let addr = config.socket_addr();
    info!(addr = %addr, "Launching API listener");

    api.serve(addr, shutdown)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))?;
    info!("API server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to install shutdown signal handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
