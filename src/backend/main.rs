/**
 * Sticky Board Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and serves
 * the Axum application.
 */

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stickyboard::backend::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "stickyboard=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env()?;
    let app = create_app(&config).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
