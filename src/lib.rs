//! WebSocket Chat Lounge Server Library
//!
//! A lounge-style chat server built with tokio-tungstenite using the
//! Actor pattern for state management. Every client that claims a unique
//! nickname can broadcast text and image messages to everyone else, and
//! all clients keep a live roster of who is present.
//!
//! # Features
//! - WebSocket connection handling
//! - Unique nickname claims with synchronous taken/free answers
//! - Broadcast fan-out of text and image messages to all other clients
//! - Join/leave announcements
//! - Roster pushes on every membership change
//! - Disconnection handling
//!
//! # Architecture
//! Uses the Actor pattern with `mpsc` channels:
//! - `LoungeServer` is the central actor owning the connection table and
//!   the nickname registry
//! - Each connection has a `handler` task communicating with the server
//! - No locks needed - all state access goes through message passing, so
//!   a claim and the broadcasts it triggers form one atomic step
//!
//! # Example
//! ```ignore
//! use tokio::net::TcpListener;
//! use tokio::sync::mpsc;
//! use lounge_server::{LoungeServer, handle_connection};
//!
//! #[tokio::main]
//! async fn main() {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     let (cmd_tx, cmd_rx) = mpsc::channel(256);
//!
//!     tokio::spawn(LoungeServer::new(cmd_rx).run());
//!
//!     while let Ok((stream, _)) = listener.accept().await {
//!         let cmd_tx = cmd_tx.clone();
//!         tokio::spawn(handle_connection(stream, cmd_tx));
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod handler;
pub mod message;
pub mod registry;
pub mod server;
pub mod types;

// Re-export main types for convenience
pub use connection::Connection;
pub use error::{AppError, SendError};
pub use handler::handle_connection;
pub use message::{ClientEvent, ServerEvent};
pub use registry::Registry;
pub use server::{LoungeServer, ServerCommand};
pub use types::{ClientId, Nickname};
