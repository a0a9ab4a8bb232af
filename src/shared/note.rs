/**
 * Sticky Note Data Structures
 *
 * This module defines the `StickyNote` record returned by the REST API and
 * the `CreateNoteRequest` accepted when a client places a new note on the
 * board.
 *
 * # Defaults
 *
 * Every optional field of a create request falls back to a named constant.
 * The defaults are applied exactly once, in `CreateNoteRequest::into_new_note`,
 * so storage never sees a partially filled note.
 *
 * # Wire Format
 *
 * Fields are serialized in camelCase (`positionX`, `createdBy`, ...) and the
 * note type as an upper-case string (`"TEXT"`, `"IMAGE"`), which is what the
 * board clients send and expect.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Default X and Y coordinate for a note placed without a position
pub const DEFAULT_POSITION: f64 = 100.0;

/// Default note width in pixels
pub const DEFAULT_WIDTH: i32 = 200;

/// Default note height in pixels
pub const DEFAULT_HEIGHT: i32 = 200;

/// Default note color (material yellow)
pub const DEFAULT_COLOR: &str = "#FFEB3B";

/// Author recorded when a client does not identify itself
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Kind of content a note carries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum NoteType {
    /// Plain text content
    Text,
    /// Image content (content holds a URL or data URI)
    Image,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
        }
    }

}

impl FromStr for NoteType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEXT" => Ok(Self::Text),
            "IMAGE" => Ok(Self::Image),
            other => Err(SharedError::validation(
                "type",
                format!("unknown note type: {other}"),
            )),
        }
    }
}

/// A positioned, sized, colored card on the board
///
/// This is the full stored representation, including the identifier and
/// timestamps assigned by storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StickyNote {
    pub id: i64,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub content: Option<String>,
    pub position_x: f64,
    pub position_y: f64,
    pub width: i32,
    pub height: i32,
    pub color: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed by storage on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/notes`
///
/// Mirrors `StickyNote` with every field optional. `id`, `createdAt` and
/// `updatedAt` are accepted so clients can post a full note back, but they are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub note_type: Option<NoteType>,
    pub content: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub color: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A note with all defaults resolved, ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub note_type: NoteType,
    pub content: Option<String>,
    pub position_x: f64,
    pub position_y: f64,
    pub width: i32,
    pub height: i32,
    pub color: String,
    pub created_by: String,
}

impl CreateNoteRequest {
    /// Create a request for a note of the given type with everything else omitted
    pub fn of_type(note_type: NoteType) -> Self {
        Self {
            note_type: Some(note_type),
            ..Default::default()
        }
    }

    /// Resolve defaults for every omitted field
    ///
    /// # Errors
    ///
    /// `SharedError::ValidationError` when `type` is missing; it is the only
    /// field without a default.
    pub fn into_new_note(self) -> Result<NewNote, SharedError> {
        let note_type = self
            .note_type
            .ok_or_else(|| SharedError::validation("type", "note type is required"))?;

        Ok(NewNote {
            note_type,
            content: self.content,
            position_x: self.position_x.unwrap_or(DEFAULT_POSITION),
            position_y: self.position_y.unwrap_or(DEFAULT_POSITION),
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_by: self.created_by.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        })
    }
}
