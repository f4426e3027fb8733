use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use clinica::api;
use clinica::config;
use clinica::core_state::CoreState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let db_path = config::database_path();
    if let Some(parent) = db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::error!("Cannot create data directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }

    let core = Arc::new(CoreState::new(db_path));

    // Fail fast when the store cannot be opened or migrated
    if let Err(e) = core.open_db() {
        tracing::error!("Cannot open database {}: {e}", core.db_path().display());
        std::process::exit(1);
    }

    let mut server = match api::start_api_server(core, config::bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %server.addr, "listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
}
