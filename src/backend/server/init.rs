/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`:
 * 1. Open the SQLite pool (foreign keys on, create-if-missing)
 * 2. Apply the embedded migrations
 * 3. Create the services and the relay hub
 * 4. Assemble the router with its layers
 *
 * Unlike optional services, the store is required: a connection or
 * migration failure is returned and startup stops.
 */

use axum::Router;

use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::SqliteStore;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> BackendResult<Router<()>> {
    tracing::info!("Initializing sticky board backend");

    let store = SqliteStore::open(&config.database_url).await?;
    let app_state = AppState::with_store(store, config.relay_capacity);

    tracing::info!(
        "Relay ready with {} buffered frames per channel",
        config.relay_capacity
    );

    let app = create_router(app_state, &config.cors_origins)?;
    tracing::info!("Router configured");

    Ok(app)
}
