//! Basic type definitions for the lounge server
//!
//! Provides newtype wrappers for type safety:
//! - `ClientId`: UUID-based unique connection identifier
//! - `Nickname`: claimed display name, usable as an ordered map key

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique connection identifier (newtype pattern)
///
/// Wraps a UUID v4 minted by the transport handler at accept time.
/// Implements Hash and Eq for use as HashMap keys. The registry stores
/// this handle instead of the connection itself, so holding an id never
/// keeps a socket alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub Uuid);

impl ClientId {
    /// Create a new random client ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Claimed display nickname
///
/// Serializes transparently as a plain JSON string. Ordered so the
/// registry can keep the roster in a stable, sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Nickname(pub String);

impl Nickname {
    /// Create a Nickname from anything string-like
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// View the nickname as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Nickname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_unique() {
        let id1 = ClientId::new();
        let id2 = ClientId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_nickname_display() {
        let nick = Nickname::new("alice");
        assert_eq!(nick.to_string(), "alice");
        assert_eq!(nick.as_str(), "alice");
    }

    #[test]
    fn test_nickname_ordering() {
        let mut nicks = vec![
            Nickname::new("carol"),
            Nickname::new("alice"),
            Nickname::new("bob"),
        ];
        nicks.sort();
        assert_eq!(nicks[0].as_str(), "alice");
        assert_eq!(nicks[2].as_str(), "carol");
    }

    #[test]
    fn test_nickname_serializes_as_string() {
        let json = serde_json::to_string(&Nickname::new("alice")).unwrap();
        assert_eq!(json, "\"alice\"");
    }
}
