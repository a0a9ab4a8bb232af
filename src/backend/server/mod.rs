//! Server Module
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - environment configuration
//! - **`init`** - store, state and router assembly
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store**: SQLite pool plus embedded migrations
//! 3. **State Creation**: note/comment services and the relay hub
//! 4. **Router Creation**: REST, relay, CORS and trace layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
