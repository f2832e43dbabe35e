//! Connection struct definition
//!
//! Represents one open bidirectional channel to a remote client, as seen
//! by the server actor.

use tokio::sync::mpsc;

use crate::error::SendError;
use crate::message::ServerEvent;
use crate::types::{ClientId, Nickname};

/// Open connection state
///
/// Holds the connection's identity handle, its claimed nickname (absent
/// until a successful claim), and the sender side of the outbound event
/// channel. The network lifetime of the socket belongs to the handler
/// task; the actor only forgets this entry on disconnect.
#[derive(Debug)]
pub struct Connection {
    /// Unique identifier for this connection
    pub id: ClientId,
    /// Claimed nickname (None while anonymous)
    pub nickname: Option<Nickname>,
    /// Server → client event channel
    pub sender: mpsc::Sender<ServerEvent>,
}

impl Connection {
    /// Create a new anonymous connection with the given ID and sender channel
    pub fn new(id: ClientId, sender: mpsc::Sender<ServerEvent>) -> Self {
        Self {
            id,
            nickname: None,
            sender,
        }
    }

    /// Send an event to this connection
    ///
    /// Returns an error if the channel is closed (client departed).
    pub async fn send(&self, event: ServerEvent) -> Result<(), SendError> {
        self.sender
            .send(event)
            .await
            .map_err(|_| SendError::ChannelClosed)
    }

    /// Check if this connection has claimed a nickname
    pub fn is_named(&self) -> bool {
        self.nickname.is_some()
    }

    /// Record a successfully claimed nickname
    pub fn set_nickname(&mut self, nickname: Nickname) {
        self.nickname = Some(nickname);
    }
}
