//! Comments Backend Module
//!
//! - **`service`** - `CommentService`, comments scoped to a parent note
//! - **`handlers`** - axum handlers for `/api/comments`

/// Comment service
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use service::CommentService;
