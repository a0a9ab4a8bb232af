//! Note HTTP Handlers
//!
//! - `GET /api/notes` - list all notes
//! - `POST /api/notes` - create a note
//! - `PUT /api/notes/{id}/position?x=..&y=..` - move a note
//! - `DELETE /api/notes/{id}` - delete a note and its comments

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::service::NoteService;
use crate::backend::error::BackendError;
use crate::shared::{CreateNoteRequest, StickyNote};

/// Query parameters of the position update
#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    pub x: f64,
    pub y: f64,
}

/// List all notes
pub async fn list_notes(
    State(notes): State<NoteService>,
) -> Result<Json<Vec<StickyNote>>, BackendError> {
    Ok(Json(notes.list_all().await?))
}

/// Create a note
pub async fn create_note(
    State(notes): State<NoteService>,
    Json(request): Json<CreateNoteRequest>,
) -> Result<Json<StickyNote>, BackendError> {
    Ok(Json(notes.create(request).await?))
}

/// Move a note
pub async fn update_note_position(
    State(notes): State<NoteService>,
    Path(id): Path<i64>,
    Query(position): Query<PositionQuery>,
) -> Result<Json<StickyNote>, BackendError> {
    Ok(Json(notes.update_position(id, position.x, position.y).await?))
}

/// Delete a note
///
/// Always `200 OK` with an empty body, whether or not the note existed.
pub async fn delete_note(
    State(notes): State<NoteService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    notes.delete(id).await?;
    Ok(StatusCode::OK)
}
