pub mod api;
pub mod chat;
pub mod config;
pub mod core_state;
pub mod dashboard;
pub mod directory;
pub mod eligibility;
pub mod emergency;
pub mod forecast;
pub mod insights;
pub mod inventory;
pub mod matching;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Start the service: initialize tracing, build shared state, serve
/// until Ctrl-C.
pub async fn run() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LIFELINK_LOG")
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let server_config = config::ServerConfig::from_env();
    tracing::info!(
        "{} starting v{} ({:?} login scheme)",
        config::APP_NAME,
        config::APP_VERSION,
        server_config.login_scheme
    );

    let core = Arc::new(core_state::CoreState::new(&server_config));
    let mut server = api::start_server(core, &server_config).await?;
    tracing::info!(addr = %server.addr(), "listening");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;
    tracing::info!("shutting down");
    server.shutdown();

    Ok(())
}
