use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::Context;

use bank_api::app::{build_app, build_health_app, services::build_services};
use bank_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    bank_observability::init(config.log_level.as_str());

    tracing::info!("starting the bank API");
    tracing::debug!(?config, "loaded configuration");

    let services = Arc::new(build_services());
    let app = build_app(services);
    let health = build_health_app();

    let listener = tokio::net::TcpListener::bind(config.api_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.api_addr()))?;
    let health_listener = tokio::net::TcpListener::bind(config.health_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.health_addr()))?;

    tracing::info!("http server listening on {}", listener.local_addr()?);
    tracing::info!("health check server listening on {}", health_listener.local_addr()?);

    let api_server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    let health_server =
        axum::serve(health_listener, health).with_graceful_shutdown(shutdown_signal());

    tokio::try_join!(api_server.into_future(), health_server.into_future())
        .context("server error")?;

    tracing::info!("bank API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
