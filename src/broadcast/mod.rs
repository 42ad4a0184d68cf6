//! Fire-and-forget fan-out of task change notifications.
//!
//! The broadcaster carries plain-text messages on a single logical stream.
//! Publishing never blocks and never fails: with no subscribers the message
//! is dropped, and a subscriber that falls behind the channel capacity loses
//! the oldest messages rather than stalling the publisher.

use tokio::sync::broadcast;

/// Logical stream name carried by every task change notification.
pub const TASK_UPDATE_STREAM: &str = "task update";

/// Default channel capacity before slow subscribers start lagging.
pub const DEFAULT_CAPACITY: usize = 64;

/// Broadcast handle shared between publishers and subscribers.
///
/// Cloning is cheap and all clones publish into the same stream.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<String>,
}

impl EventBroadcaster {
    /// Creates a broadcaster with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to notifications published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    /// Publishes a notification to all current subscribers.
    ///
    /// Returns the number of subscribers the message reached. Zero means the
    /// message was dropped, which is not an error.
    pub fn publish(&self, message: impl Into<String>) -> usize {
        self.sender.send(message.into()).unwrap_or(0)
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
