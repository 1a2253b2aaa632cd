use anyhow::Context;
use tracing::{error, info, warn};

use folio_infrastructure::config::ServerConfig;
use folio_infrastructure::logging::{init_logger, LoggingConfig};
use folio_lib::presentation::{build_app_state, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    if let Err(e) = init_logger(LoggingConfig::from(&config)) {
        // Fall back to plain stdout logging so startup stays visible
        eprintln!("Failed to initialize logger: {e:#}");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .try_init();
    }

    info!("🚀 Folio starting...");
    for message in config.warnings() {
        warn!("{}", message);
    }

    let address = config.bind_address();
    let state = build_app_state(config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("✓ Listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Folio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
