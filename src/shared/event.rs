/**
 * Real-time Relay Channels
 *
 * This module names the four relay channels and the two addresses each one
 * is reachable under: the inbound destination clients publish to and the
 * outbound topic clients subscribe to.
 *
 * | Channel        | Inbound        | Outbound       |
 * |----------------|----------------|----------------|
 * | `NoteCreated`  | `note/create`  | `notes`        |
 * | `NoteMoved`    | `note/move`    | `notes/move`   |
 * | `NoteDeleted`  | `note/delete`  | `notes/delete` |
 * | `CommentAdded` | `comment/add`  | `comments`     |
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A relay channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    NoteCreated,
    NoteMoved,
    NoteDeleted,
    CommentAdded,
}

impl Channel {
    /// Every channel, in a fixed order
    pub const ALL: [Channel; 4] = [
        Channel::NoteCreated,
        Channel::NoteMoved,
        Channel::NoteDeleted,
        Channel::CommentAdded,
    ];

    /// Destination clients publish to
    pub fn inbound(&self) -> &'static str {
        match self {
            Self::NoteCreated => "note/create",
            Self::NoteMoved => "note/move",
            Self::NoteDeleted => "note/delete",
            Self::CommentAdded => "comment/add",
        }
    }

    /// Topic subscribers listen on
    pub fn topic(&self) -> &'static str {
        match self {
            Self::NoteCreated => "notes",
            Self::NoteMoved => "notes/move",
            Self::NoteDeleted => "notes/delete",
            Self::CommentAdded => "comments",
        }
    }

    /// Name used for the SSE `event:` field
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::NoteCreated => "note-created",
            Self::NoteMoved => "note-moved",
            Self::NoteDeleted => "note-deleted",
            Self::CommentAdded => "comment-added",
        }
    }

    /// Look up a channel by inbound destination
    ///
    /// Leading and trailing slashes are ignored so `/note/move` and
    /// `note/move` resolve the same way.
    pub fn from_inbound(destination: &str) -> Result<Self, SharedError> {
        let name = destination.trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|c| c.inbound() == name)
            .ok_or_else(|| SharedError::unknown_channel(destination))
    }

    /// Look up a channel by outbound topic
    pub fn from_topic(topic: &str) -> Result<Self, SharedError> {
        let name = topic.trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|c| c.topic() == name)
            .ok_or_else(|| SharedError::unknown_channel(topic))
    }
}

/// A payload travelling through the relay
///
/// The payload is the exact text the publisher sent; it is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayFrame {
    pub channel: Channel,
    pub payload: String,
}

impl RelayFrame {
    pub fn new(channel: Channel, payload: impl Into<String>) -> Self {
        Self {
            channel,
            payload: payload.into(),
        }
    }
}
