//! Shared Module
//!
//! Types exchanged between board clients and the server: the note and
//! comment records, their create requests, relay channel names, and the
//! validation errors raised while building them.
//!
//! Nothing in here touches storage or the network, so these types can be
//! used from any client that speaks the board's JSON.

/// Sticky note records and defaults
pub mod note;

/// Comment records
pub mod comment;

/// Real-time relay channels
pub mod event;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use comment::{Comment, CreateCommentRequest, NewComment};
pub use error::SharedError;
pub use event::{Channel, RelayFrame};
pub use note::{CreateNoteRequest, NewNote, NoteType, StickyNote};
