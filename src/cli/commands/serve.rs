use anyhow::Context;

use crate::config;
use crate::router;

pub async fn handle(port: Option<u16>) -> anyhow::Result<()> {
    let config = config::config();
    tracing::info!("Starting Clinic API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        tracing::warn!("JWT_SECRET is not set; every bearer token will be rejected");
    }
    if crate::is_development!() {
        tracing::info!("Development profile: permissive CORS and built-in JWT secret");
    }

    let port = port.unwrap_or(config.api.port);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Clinic API listening on http://{}", bind_addr);

    axum::serve(listener, router::app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Clinic API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
