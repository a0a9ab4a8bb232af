//! Backend Module
//!
//! All server-side code of the sticky board: an Axum HTTP server with a
//! REST surface for notes and comments, backed by SQLite through `sqlx`,
//! and a real-time relay that forwards client payloads between clients.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route configuration and router assembly
//! - **`notes`** - note service and handlers
//! - **`comments`** - comment service and handlers
//! - **`store`** - `BoardStore` trait and the SQLite implementation
//! - **`realtime`** - broadcast relay and SSE subscriptions
//! - **`error`** - backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs
//! ├── main.rs     - server binary
//! ├── server/     - config, state, init
//! ├── routes/     - router, api and relay routes
//! ├── notes/      - NoteService and handlers
//! ├── comments/   - CommentService and handlers
//! ├── store/      - BoardStore, SqliteStore
//! ├── realtime/   - RelayHub, publish, subscription
//! └── error/      - BackendError
//! ```
//!
//! The relay and the store are independent: relaying a `note/move` frame
//! does not move the stored note, and REST mutations publish nothing.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Sticky notes
pub mod notes;

/// Comments on notes
pub mod comments;

/// Persistence
pub mod store;

/// Real-time relay
pub mod realtime;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use realtime::RelayHub;
pub use server::{create_app, AppState, ServerConfig};
pub use store::{BoardStore, SqliteStore};
