//! Event protocol definitions
//!
//! JSON-based bidirectional event protocol using Serde's tagged enum
//! for type-safe serialization/deserialization.

use serde::{Deserialize, Serialize};

use crate::types::Nickname;

/// Client → Server event
///
/// All events from client to server. Uses tagged enum with snake_case naming.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Request a nickname (answered with NameResult, requester only)
    Nickname { nickname: Nickname },
    /// Send a text message to everyone else
    Chat { content: String },
    /// Send an image payload (data-URL string) to everyone else
    Image { data: String },
}

/// Server → Client event
///
/// All events from server to client. Uses tagged enum with snake_case naming.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Answer to a nickname request; true means the name is already held
    NameResult { taken: bool },
    /// Text message relayed from another client
    Chat { nickname: Nickname, content: String },
    /// Image payload relayed from another client
    Image { nickname: Nickname, data: String },
    /// System notice reporting a join or leave
    Announcement { text: String },
    /// Full current nickname list, pushed on every membership change
    Roster { nicknames: Vec<Nickname> },
}
