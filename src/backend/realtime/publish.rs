//! Relay Publish Handler
//!
//! `POST /app/{destination}` forwards the raw request body to every
//! subscriber of the matching outbound topic. The body is never parsed,
//! validated, or persisted.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::broadcast::RelayHub;
use crate::backend::error::BackendError;
use crate::shared::Channel;

/// Acknowledgement returned to the publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    /// Outbound topic the payload was forwarded to
    pub topic: String,
    /// Subscribers that received it
    pub subscribers: usize,
}

/// Handle a relay publish (POST /app/{destination})
///
/// # Errors
///
/// * `404 Not Found` - unknown inbound destination
pub async fn handle_publish(
    State(relay): State<RelayHub>,
    Path(destination): Path<String>,
    payload: String,
) -> Result<(StatusCode, Json<PublishReceipt>), BackendError> {
    let channel = Channel::from_inbound(&destination)?;
    let subscribers = relay.publish(channel, payload);

    Ok((
        StatusCode::ACCEPTED,
        Json(PublishReceipt {
            topic: channel.topic().to_string(),
            subscribers,
        }),
    ))
}
