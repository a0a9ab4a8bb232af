//! Comment HTTP Handlers
//!
//! - `GET /api/comments/note/{noteId}` - list a note's comments
//! - `POST /api/comments` - add a comment to a note

use axum::{
    extract::{Path, State},
    Json,
};

use super::service::CommentService;
use crate::backend::error::BackendError;
use crate::shared::{Comment, CreateCommentRequest};

/// List the comments of a note
pub async fn list_comments(
    State(comments): State<CommentService>,
    Path(note_id): Path<i64>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    Ok(Json(comments.list_by_note(note_id).await?))
}

/// Add a comment
///
/// `404 Not Found` when `stickyNoteId` does not name an existing note.
pub async fn create_comment(
    State(comments): State<CommentService>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<Comment>, BackendError> {
    Ok(Json(comments.create(request).await?))
}
