//! In-memory `BoardStore` used by service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::backend::store::BoardStore;
use crate::shared::{Comment, NewComment, NewNote, StickyNote};

#[derive(Default)]
struct Tables {
    notes: BTreeMap<i64, StickyNote>,
    comments: BTreeMap<i64, Comment>,
    next_note_id: i64,
    next_comment_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn list_notes(&self) -> Result<Vec<StickyNote>, sqlx::Error> {
        Ok(self.tables.read().await.notes.values().cloned().collect())
    }

    async fn find_note(&self, id: i64) -> Result<Option<StickyNote>, sqlx::Error> {
        Ok(self.tables.read().await.notes.get(&id).cloned())
    }

    async fn insert_note(&self, note: NewNote) -> Result<StickyNote, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.next_note_id += 1;
        let now = Utc::now();
        let stored = StickyNote {
            id: tables.next_note_id,
            note_type: note.note_type,
            content: note.content,
            position_x: note.position_x,
            position_y: note.position_y,
            width: note.width,
            height: note.height,
            color: note.color,
            created_by: note.created_by,
            created_at: now,
            updated_at: now,
        };
        tables.notes.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_note_position(
        &self,
        id: i64,
        x: f64,
        y: f64,
    ) -> Result<Option<StickyNote>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        Ok(tables.notes.get_mut(&id).map(|note| {
            note.position_x = x;
            note.position_y = y;
            note.updated_at = Utc::now();
            note.clone()
        }))
    }

    async fn delete_note(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.comments.retain(|_, c| c.sticky_note_id != id);
        Ok(tables.notes.remove(&id).is_some())
    }

    async fn list_comments(&self, note_id: i64) -> Result<Vec<Comment>, sqlx::Error> {
        Ok(self
            .tables
            .read()
            .await
            .comments
            .values()
            .filter(|c| c.sticky_note_id == note_id)
            .cloned()
            .collect())
    }

    async fn insert_comment(&self, comment: NewComment) -> Result<Option<Comment>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        if !tables.notes.contains_key(&comment.sticky_note_id) {
            return Ok(None);
        }
        tables.next_comment_id += 1;
        let stored = Comment {
            id: tables.next_comment_id,
            content: comment.content,
            author: comment.author,
            sticky_note_id: comment.sticky_note_id,
            created_at: Utc::now(),
        };
        tables.comments.insert(stored.id, stored.clone());
        Ok(Some(stored))
    }
}
