//! Error types for the lounge server
//!
//! Defines transport-level errors and event send errors.
//! Uses thiserror for ergonomic error definitions.
//!
//! A rejected nickname claim is not represented here: it is a normal,
//! expected outcome carried as the boolean in `ServerEvent::NameResult`.

use thiserror::Error;

/// Transport-level errors
///
/// Conditions that terminate a single connection handler. None of these
/// reach the server actor, which treats an unreachable connection as
/// already gone.
#[derive(Debug, Error)]
pub enum AppError {
    /// WebSocket protocol error (fatal)
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (fatal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Channel send error (fatal - internal channel broken)
    #[error("Channel send error")]
    ChannelSend,
}

/// Event send errors
///
/// Occurs when attempting to send events through closed channels.
#[derive(Debug, Error)]
pub enum SendError {
    /// The receiving end of the channel has been closed
    #[error("Channel closed")]
    ChannelClosed,
}
