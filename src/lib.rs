//! Sticky Board - Main Library
//!
//! Backend for a collaborative sticky-note whiteboard. Notes and comments
//! are persisted in SQLite and managed over a REST API; a real-time relay
//! forwards client events (note created, moved, deleted, comment added)
//! to every connected client without touching storage.
//!
//! # Module Structure
//!
//! - **`shared`** - wire types shared with clients
//!   - `StickyNote`, `Comment` and their create requests
//!   - relay `Channel`s and frames
//!   - validation errors
//!
//! - **`backend`** - the server
//!   - Axum router, REST handlers and services
//!   - `sqlx` SQLite store
//!   - broadcast relay with SSE subscriptions
//!
//! # Usage
//!
//! ```rust,no_run
//! use stickyboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
