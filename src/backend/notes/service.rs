/**
 * Note Service
 *
 * CRUD operations over sticky notes. The service resolves defaults for
 * create requests, maps missing notes to `BackendError::NotFound`, and
 * leaves timestamps and transactions to the injected store.
 */

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::SharedStore;
use crate::shared::{CreateNoteRequest, SharedError, StickyNote};

/// Entity name used in not-found errors
pub const NOTE_ENTITY: &str = "StickyNote";

#[derive(Clone)]
pub struct NoteService {
    store: SharedStore,
}

impl NoteService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All notes on the board
    pub async fn list_all(&self) -> BackendResult<Vec<StickyNote>> {
        let notes = self.store.list_notes().await?;
        tracing::debug!("[Notes] Listed {} notes", notes.len());
        Ok(notes)
    }

    /// Create a note, filling omitted fields with their defaults
    pub async fn create(&self, request: CreateNoteRequest) -> BackendResult<StickyNote> {
        let new_note = request.into_new_note()?;
        let note = self.store.insert_note(new_note).await?;
        tracing::info!(
            "[Notes] Created {} note {} at ({}, {})",
            note.note_type.as_str(),
            note.id,
            note.position_x,
            note.position_y
        );
        Ok(note)
    }

    /// Move a note
    ///
    /// Only the position changes; every other field is left as stored.
    /// Coordinates must be finite.
    pub async fn update_position(&self, id: i64, x: f64, y: f64) -> BackendResult<StickyNote> {
        ensure_finite("x", x)?;
        ensure_finite("y", y)?;

        let note = self
            .store
            .update_note_position(id, x, y)
            .await?
            .ok_or_else(|| BackendError::not_found(NOTE_ENTITY, id))?;
        tracing::info!("[Notes] Moved note {} to ({}, {})", id, x, y);
        Ok(note)
    }

    /// Delete a note and its comments
    ///
    /// Deleting a note that does not exist is not an error.
    pub async fn delete(&self, id: i64) -> BackendResult<()> {
        let removed = self.store.delete_note(id).await?;
        if removed {
            tracing::info!("[Notes] Deleted note {}", id);
        } else {
            tracing::debug!("[Notes] Delete of missing note {} ignored", id);
        }
        Ok(())
    }

    /// A single note
    pub async fn get(&self, id: i64) -> BackendResult<StickyNote> {
        self.store
            .find_note(id)
            .await?
            .ok_or_else(|| BackendError::not_found(NOTE_ENTITY, id))
    }
}

fn ensure_finite(field: &str, value: f64) -> Result<(), SharedError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("coordinate must be a finite number, got {value}"),
        ))
    }
}
