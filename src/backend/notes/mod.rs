//! Notes Backend Module
//!
//! - **`service`** - `NoteService`, note CRUD over the injected store
//! - **`handlers`** - axum handlers for `/api/notes`

/// Note service
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use service::NoteService;
