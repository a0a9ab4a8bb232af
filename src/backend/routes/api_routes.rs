/**
 * API Route Configuration
 *
 * REST surface, nested under `/api` by the main router.
 *
 * # Routes
 *
 * ## Notes
 * - `GET /notes` - list all notes
 * - `POST /notes` - create a note
 * - `PUT /notes/{id}/position` - move a note
 * - `DELETE /notes/{id}` - delete a note and its comments
 *
 * ## Comments
 * - `GET /comments/note/{note_id}` - comments of a note
 * - `POST /comments` - add a comment
 */

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::comments::handlers::{create_comment, list_comments};
use crate::backend::notes::handlers::{create_note, delete_note, list_notes, update_note_position};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}/position", put(update_note_position))
        .route("/notes/{id}", delete(delete_note))
        .route("/comments", post(create_comment))
        .route("/comments/note/{note_id}", get(list_comments))
}
