//! Storage Module
//!
//! The storage layer persists notes and comments. Services never talk to a
//! database directly; they receive an injected `Arc<dyn BoardStore>`.
//!
//! - **`sqlite`** - `SqliteStore`, the `sqlx` implementation used by the server
//! - **`memory`** - `MemoryStore`, an in-process double for unit tests
//!
//! # Transactions
//!
//! Every mutating method is one atomic unit. `delete_note` removes the
//! note's comments and then the note inside a single transaction, and
//! `insert_comment` checks the parent and inserts inside a single
//! transaction, so a comment can never be written for a missing note.

use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::{Comment, NewComment, NewNote, StickyNote};

/// SQLite storage
pub mod sqlite;

/// In-memory storage for tests
#[cfg(test)]
pub mod memory;

pub use sqlite::SqliteStore;

/// Shared handle to a store
pub type SharedStore = Arc<dyn BoardStore>;

/// Persistence operations for the board
///
/// Timestamps are owned by the store: `insert_*` sets `created_at` (and
/// `updated_at` for notes), and every note mutation refreshes `updated_at`.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// All notes, ordered by id
    async fn list_notes(&self) -> Result<Vec<StickyNote>, sqlx::Error>;

    /// A single note, if it exists
    async fn find_note(&self, id: i64) -> Result<Option<StickyNote>, sqlx::Error>;

    /// Insert a note and return the stored row
    async fn insert_note(&self, note: NewNote) -> Result<StickyNote, sqlx::Error>;

    /// Overwrite a note's position
    ///
    /// Returns `None` when no note has this id.
    async fn update_note_position(
        &self,
        id: i64,
        x: f64,
        y: f64,
    ) -> Result<Option<StickyNote>, sqlx::Error>;

    /// Delete a note and its comments
    ///
    /// Returns whether a note was removed.
    async fn delete_note(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Comments owned by a note, ordered by id
    async fn list_comments(&self, note_id: i64) -> Result<Vec<Comment>, sqlx::Error>;

    /// Insert a comment if its parent note exists
    ///
    /// Returns `None`, writing nothing, when the parent is missing.
    async fn insert_comment(&self, comment: NewComment) -> Result<Option<Comment>, sqlx::Error>;
}
