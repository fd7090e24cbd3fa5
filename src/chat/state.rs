/**
 * Chat Room State
 *
 * This module manages per-room broadcast channels for real-time chat
 * delivery. Each room gets its own channel to prevent cross-talk between
 * rooms; channels are created lazily on first use and reaped by a
 * periodic cleanup task once every subscriber has disconnected.
 *
 * # Thread Safety
 *
 * The registry is an `Arc<Mutex<HashMap>>` shared across all WebSocket
 * connections; the lock is held only for registry bookkeeping, never
 * across an await point.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Channel capacity per room; slow subscribers past this lag drop messages
const ROOM_CHANNEL_CAPACITY: usize = 100;

/// A chat message delivered to room subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMessage {
    /// Room the message belongs to
    pub room_id: String,
    /// Sender's email, taken from the session
    pub sender: String,
    /// Message body
    pub content: String,
    /// Server-side receive time
    pub timestamp: DateTime<Utc>,
}

/// Registry of per-room broadcast channels
#[derive(Clone, Default)]
pub struct ChatRooms {
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<RoomMessage>>>>,
}

impl ChatRooms {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get or create the broadcast sender for a room
    pub fn get_sender(&self, room_id: &str) -> broadcast::Sender<RoomMessage> {
        let mut channels = self.channels.lock().unwrap();
        channels
            .entry(room_id.to_string())
            .or_insert_with(|| broadcast::channel(ROOM_CHANNEL_CAPACITY).0)
            .clone()
    }

    /// Broadcast a message to all subscribers of its room
    ///
    /// A room with no subscribers swallows the message; senders are not
    /// required to be subscribed themselves.
    pub fn broadcast(&self, message: RoomMessage) {
        let sender = self.get_sender(&message.room_id);
        let _ = sender.send(message);
    }

    /// Drop channels whose subscribers have all disconnected
    pub fn cleanup_inactive_rooms(&self) {
        self.channels
            .lock()
            .unwrap()
            .retain(|_, sender| sender.receiver_count() > 0);
    }

    /// Subscriber count for a room (for logging)
    pub fn subscriber_count(&self, room_id: &str) -> usize {
        self.channels
            .lock()
            .unwrap()
            .get(room_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}
