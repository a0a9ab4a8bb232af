/**
 * Comment Service
 *
 * Create and list comments scoped to a parent note. Creation fails with
 * `NotFound` when the parent does not exist; listing never checks the
 * parent and returns an empty list instead.
 */

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::notes::service::NOTE_ENTITY;
use crate::backend::store::SharedStore;
use crate::shared::{Comment, CreateCommentRequest};

#[derive(Clone)]
pub struct CommentService {
    store: SharedStore,
}

impl CommentService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Comments attached to a note
    pub async fn list_by_note(&self, note_id: i64) -> BackendResult<Vec<Comment>> {
        let comments = self.store.list_comments(note_id).await?;
        tracing::debug!("[Comments] Listed {} comments for note {}", comments.len(), note_id);
        Ok(comments)
    }

    /// Attach a comment to an existing note
    pub async fn create(&self, request: CreateCommentRequest) -> BackendResult<Comment> {
        let new_comment = request.into_new_comment()?;
        let note_id = new_comment.sticky_note_id;

        let comment = self
            .store
            .insert_comment(new_comment)
            .await?
            .ok_or_else(|| BackendError::not_found(NOTE_ENTITY, note_id))?;

        tracing::info!(
            "[Comments] {} commented on note {} (comment {})",
            comment.author,
            note_id,
            comment.id
        );
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::notes::NoteService;
    use crate::backend::store::memory::MemoryStore;
    use crate::shared::{CreateNoteRequest, NoteType};
    use assert_matches::assert_matches;
    use std::sync::Arc;

    async fn setup() -> (Arc<MemoryStore>, NoteService, CommentService, i64) {
        let store = Arc::new(MemoryStore::new());
        let notes = NoteService::new(store.clone());
        let comments = CommentService::new(store.clone());
        let note = notes
            .create(CreateNoteRequest::of_type(NoteType::Text))
            .await
            .unwrap();
        (store, notes, comments, note.id)
    }

    #[tokio::test]
    async fn test_author_defaults_to_anonymous() {
        let (_, _, comments, note_id) = setup().await;
        let comment = comments
            .create(CreateCommentRequest::new(note_id, "nice"))
            .await
            .unwrap();
        assert_eq!(comment.author, "Anonymous");
        assert_eq!(comment.sticky_note_id, note_id);
    }

    #[tokio::test]
    async fn test_missing_note_persists_nothing() {
        let (store, _, comments, _) = setup().await;
        let err = comments
            .create(CreateCommentRequest::new(999, "hello?").with_author("Dan"))
            .await
            .unwrap_err();
        assert_matches!(err, BackendError::NotFound { id: 999, .. });
        assert_eq!(store.comment_count().await, 0);
    }

    #[tokio::test]
    async fn test_list_for_unknown_note_is_empty() {
        let (_, _, comments, _) = setup().await;
        assert!(comments.list_by_note(31337).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_note_delete_removes_comments() {
        let (_, notes, comments, note_id) = setup().await;
        for i in 0..4 {
            comments
                .create(CreateCommentRequest::new(note_id, format!("comment {i}")))
                .await
                .unwrap();
        }
        assert_eq!(comments.list_by_note(note_id).await.unwrap().len(), 4);

        notes.delete(note_id).await.unwrap();
        assert!(comments.list_by_note(note_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_content_rejected_before_storage() {
        let (store, _, comments, note_id) = setup().await;
        let err = comments
            .create(CreateCommentRequest::new(note_id, ""))
            .await
            .unwrap_err();
        assert_matches!(err, BackendError::SharedError(_));
        assert_eq!(store.comment_count().await, 0);
    }
}
