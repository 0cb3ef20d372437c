use core_config::tracing::{init_tracing, install_color_eyre};
use inventory_api::{build_router, config::Config, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let server = config.server.clone();
    let state = AppState::new(config);
    let router = build_router(&state)?;

    info!(
        "Starting {} v{} ({:?} shutdown timeout)",
        state.config.app.title, state.config.app.version, server.shutdown_timeout
    );

    axum_helpers::create_production_app(router, &server, async move {
        let items = state.items.count_items().await.unwrap_or_default();
        let users = state.users.count_users().await.unwrap_or_default();
        info!(items, users, "Discarding in-memory store");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
