/**
 * Relay Broadcasting
 *
 * `RelayHub` owns one `tokio::sync::broadcast` channel per relay channel.
 * Publishing hands the frame to every receiver currently subscribed to
 * that channel; nothing is stored, and a channel with no subscribers
 * simply drops the frame.
 *
 * # Lagging Subscribers
 *
 * Each channel buffers `capacity` frames. A subscriber that falls further
 * behind skips the oldest frames instead of slowing publishers down.
 */

use tokio::sync::broadcast;

use crate::shared::{Channel, RelayFrame};

/// Fan-out hub for the four relay channels
#[derive(Clone, Debug)]
pub struct RelayHub {
    senders: [broadcast::Sender<RelayFrame>; 4],
}

impl RelayHub {
    /// Create a hub whose channels each buffer `capacity` frames
    pub fn new(capacity: usize) -> Self {
        Self {
            senders: std::array::from_fn(|_| broadcast::channel(capacity).0),
        }
    }

    fn sender(&self, channel: Channel) -> &broadcast::Sender<RelayFrame> {
        let slot = match channel {
            Channel::NoteCreated => 0,
            Channel::NoteMoved => 1,
            Channel::NoteDeleted => 2,
            Channel::CommentAdded => 3,
        };
        &self.senders[slot]
    }

    /// Subscribe to a channel's outbound topic
    pub fn subscribe(&self, channel: Channel) -> broadcast::Receiver<RelayFrame> {
        let rx = self.sender(channel).subscribe();
        tracing::debug!(
            "[Realtime] New subscriber on {} ({} total)",
            channel.topic(),
            self.subscriber_count(channel)
        );
        rx
    }

    /// Forward a payload, unchanged, to every current subscriber
    ///
    /// # Returns
    ///
    /// Number of subscribers that received the frame (0 if none)
    pub fn publish(&self, channel: Channel, payload: impl Into<String>) -> usize {
        let frame = RelayFrame::new(channel, payload);
        match self.sender(channel).send(frame) {
            Ok(subscriber_count) => {
                tracing::info!(
                    "[Realtime] {} -> {} delivered to {} subscribers",
                    channel.inbound(),
                    channel.topic(),
                    subscriber_count
                );
                subscriber_count
            }
            Err(_) => {
                tracing::debug!("[Realtime] No subscribers on {}", channel.topic());
                0
            }
        }
    }

    /// Current number of subscribers on a channel
    pub fn subscriber_count(&self, channel: Channel) -> usize {
        self.sender(channel).receiver_count()
    }
}

impl Default for RelayHub {
    fn default() -> Self {
        Self::new(crate::backend::server::config::DEFAULT_RELAY_CAPACITY)
    }
}
