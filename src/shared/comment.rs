/**
 * Comment Data Structures
 *
 * A comment is a short text annotation owned by exactly one sticky note.
 * Comments are created through `POST /api/comments` and listed per note.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::note::DEFAULT_AUTHOR;

/// A stored comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub sticky_note_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/comments`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub id: Option<i64>,
    #[serde(default)]
    pub content: String,
    pub author: Option<String>,
    pub sticky_note_id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment with its author resolved, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub author: String,
    pub sticky_note_id: i64,
}

impl CreateCommentRequest {
    pub fn new(sticky_note_id: i64, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sticky_note_id,
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Validate content and resolve the author
    ///
    /// A blank or missing author becomes `"Anonymous"`.
    pub fn into_new_comment(self) -> Result<NewComment, SharedError> {
        if self.content.is_empty() {
            return Err(SharedError::validation("content", "comment content cannot be empty"));
        }

        let author = self
            .author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        Ok(NewComment {
            content: self.content,
            author,
            sticky_note_id: self.sticky_note_id,
        })
    }
}
