//! Real-time Relay Module
//!
//! Clients publish to an inbound destination and every subscriber of the
//! paired outbound topic receives the payload verbatim. The relay never
//! touches the store.
//!
//! | Inbound          | Outbound        | SSE event      |
//! |------------------|-----------------|----------------|
//! | `/app/note/create` | `/topic/notes`        | `note-created` |
//! | `/app/note/move`   | `/topic/notes/move`   | `note-moved`   |
//! | `/app/note/delete` | `/topic/notes/delete` | `note-deleted` |
//! | `/app/comment/add` | `/topic/comments`     | `comment-added` |
//!
//! - **`broadcast`** - `RelayHub`, one broadcast channel per relay channel
//! - **`publish`** - inbound publish handler
//! - **`subscription`** - SSE subscription handler

pub mod broadcast;
pub mod publish;
pub mod subscription;

pub use broadcast::RelayHub;
pub use publish::{handle_publish, PublishReceipt};
pub use subscription::handle_topic_subscription;
