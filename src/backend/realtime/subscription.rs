/**
 * Topic Subscription Handler
 *
 * `GET /topic/{topic}` opens a Server-Sent Events stream on one of the
 * relay's outbound topics (`notes`, `notes/move`, `notes/delete`,
 * `comments`). Each relayed frame becomes one SSE event whose name is the
 * channel's event name and whose data is the payload exactly as published.
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive comment lines
 * - Lagged frames are logged and skipped; the stream stays open
 * - The stream ends when the relay hub is dropped
 */

use std::borrow::Cow;
use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::{stream, Stream};
use tokio::sync::broadcast::{self, error::RecvError};

use super::broadcast::RelayHub;
use crate::backend::error::BackendError;
use crate::shared::{Channel, RelayFrame};

/// Handle topic subscription (GET /topic/{topic})
///
/// # Errors
///
/// * `404 Not Found` - unknown topic
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: note-moved
/// data: {"id":1,"x":10.5,"y":20}
/// ```
pub async fn handle_topic_subscription(
    State(relay): State<RelayHub>,
    Path(topic): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, BackendError> {
    let channel = Channel::from_topic(&topic)?;
    let rx = relay.subscribe(channel);

    tracing::info!("[Realtime] Subscription active on {}", channel.topic());

    let stream = stream::unfold(rx, |mut rx| async move {
        let frame = next_frame(&mut rx).await?;
        Some((Ok(frame_to_event(&frame)), rx))
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

/// Wait for the next frame, skipping over any the receiver lagged past
///
/// Returns `None` once the channel is closed.
pub async fn next_frame(rx: &mut broadcast::Receiver<RelayFrame>) -> Option<RelayFrame> {
    loop {
        match rx.recv().await {
            Ok(frame) => return Some(frame),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("[Realtime] Receiver lagged, skipped {} frames", skipped);
                continue;
            }
            Err(RecvError::Closed) => {
                tracing::warn!("[Realtime] Relay channel closed, ending stream");
                return None;
            }
        }
    }
}

/// Render a relayed frame as an SSE event
pub fn frame_to_event(frame: &RelayFrame) -> Event {
    Event::default()
        .event(frame.channel.event_name())
        .data(sse_data(&frame.payload))
}

/// SSE has no escape for carriage returns, so they are sent as line feeds.
fn sse_data(payload: &str) -> Cow<'_, str> {
    if payload.contains('\r') {
        Cow::Owned(payload.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(payload)
    }
}
