//! Route Configuration Module
//!
//! - **`router`** - main router creation, layers and fallback
//! - **`api_routes`** - REST endpoints under `/api`
//! - **`realtime_routes`** - relay publish and subscribe endpoints

/// Main router creation
pub mod router;

/// REST endpoints
pub mod api_routes;

/// Relay endpoints
pub mod realtime_routes;

pub use router::create_router;
