//! LoungeServer Actor implementation
//!
//! The central actor that manages all state: the open-connection table and
//! the nickname registry. Uses the Actor pattern with mpsc channels for
//! message passing, so claim/release and the broadcasts they trigger are
//! processed as a single step relative to other commands.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::connection::Connection;
use crate::message::ServerEvent;
use crate::registry::Registry;
use crate::types::{ClientId, Nickname};

/// Commands sent from handlers to the LoungeServer actor
#[derive(Debug)]
pub enum ServerCommand {
    /// New connection opened
    Connect {
        client_id: ClientId,
        sender: mpsc::Sender<ServerEvent>,
    },
    /// Connection closed
    Disconnect {
        client_id: ClientId,
    },
    /// Request a nickname
    ClaimNickname {
        client_id: ClientId,
        nickname: Nickname,
    },
    /// Send a text message to everyone else
    Chat {
        client_id: ClientId,
        content: String,
    },
    /// Send an image payload to everyone else
    Image {
        client_id: ClientId,
        data: String,
    },
}

/// The main LoungeServer actor
///
/// Owns the only mutable presence state in the process: the table of open
/// connections and the nickname registry. Command handlers never iterate
/// the table directly; all fan-out goes through the send_to helpers.
pub struct LoungeServer {
    /// All open connections: ClientId -> Connection
    connections: HashMap<ClientId, Connection>,
    /// Claimed nicknames: Nickname -> ClientId
    registry: Registry,
    /// Command receiver channel
    receiver: mpsc::Receiver<ServerCommand>,
}

impl LoungeServer {
    /// Create a new LoungeServer with the given command receiver
    pub fn new(receiver: mpsc::Receiver<ServerCommand>) -> Self {
        Self {
            connections: HashMap::new(),
            registry: Registry::new(),
            receiver,
        }
    }

    /// Run the LoungeServer event loop
    ///
    /// Continuously receives and processes commands until all senders are dropped.
    pub async fn run(mut self) {
        info!("LoungeServer started");

        while let Some(cmd) = self.receiver.recv().await {
            self.handle_command(cmd).await;
        }

        info!("LoungeServer shutting down");
    }

    /// Process a single command
    async fn handle_command(&mut self, cmd: ServerCommand) {
        match cmd {
            ServerCommand::Connect { client_id, sender } => {
                self.handle_connect(client_id, sender).await;
            }
            ServerCommand::Disconnect { client_id } => {
                self.handle_disconnect(client_id).await;
            }
            ServerCommand::ClaimNickname { client_id, nickname } => {
                self.handle_claim(client_id, nickname).await;
            }
            ServerCommand::Chat { client_id, content } => {
                self.handle_chat(client_id, content).await;
            }
            ServerCommand::Image { client_id, data } => {
                self.handle_image(client_id, data).await;
            }
        }
    }

    /// Handle a new connection
    async fn handle_connect(&mut self, client_id: ClientId, sender: mpsc::Sender<ServerEvent>) {
        info!("Connection {} opened", client_id);
        let connection = Connection::new(client_id, sender);
        self.connections.insert(client_id, connection);
        debug!(
            "Open connections: {}, claimed nicknames: {}",
            self.connections.len(),
            self.registry.len()
        );
    }

    /// Handle a closed connection
    ///
    /// Anonymous departures are silent. A named departure releases the
    /// nickname, announces the leave, and pushes the updated roster to
    /// every remaining connection.
    async fn handle_disconnect(&mut self, client_id: ClientId) {
        let Some(connection) = self.connections.remove(&client_id) else {
            return;
        };

        info!("Connection {} closed", client_id);

        if let Some(nickname) = connection.nickname {
            self.registry.release(client_id);
            self.send_to_all(ServerEvent::Announcement {
                text: format!("{} disconnected", nickname),
            })
            .await;
            self.send_to_all(ServerEvent::Roster {
                nicknames: self.registry.snapshot(),
            })
            .await;
        }

        debug!(
            "Open connections: {}, claimed nicknames: {}",
            self.connections.len(),
            self.registry.len()
        );
    }

    /// Handle a nickname request
    ///
    /// The requester always gets exactly one NameResult. On success the
    /// join is announced to everyone else and the new roster is pushed to
    /// every open connection, requester included. A connection that is
    /// already named is answered as taken and the registry is untouched.
    async fn handle_claim(&mut self, client_id: ClientId, nickname: Nickname) {
        let Some(connection) = self.connections.get(&client_id) else {
            return;
        };

        if connection.is_named() || !self.registry.claim(nickname.clone(), client_id) {
            debug!("Connection {} denied nickname '{}'", client_id, nickname);
            self.send_to(client_id, ServerEvent::NameResult { taken: true })
                .await;
            return;
        }

        if let Some(connection) = self.connections.get_mut(&client_id) {
            connection.set_nickname(nickname.clone());
        }

        info!("Connection {} claimed nickname '{}'", client_id, nickname);

        self.send_to(client_id, ServerEvent::NameResult { taken: false })
            .await;
        self.send_to_all_except(
            client_id,
            ServerEvent::Announcement {
                text: format!("{} connected", nickname),
            },
        )
        .await;
        self.send_to_all(ServerEvent::Roster {
            nicknames: self.registry.snapshot(),
        })
        .await;
    }

    /// Handle a text message
    ///
    /// Anonymous senders are ignored. Named senders are relayed to every
    /// other open connection, tagged with their nickname, and never echoed
    /// back to themselves.
    async fn handle_chat(&mut self, client_id: ClientId, content: String) {
        let Some(nickname) = self.sender_nickname(client_id) else {
            return;
        };

        self.send_to_all_except(client_id, ServerEvent::Chat { nickname, content })
            .await;
    }

    /// Handle an image payload
    ///
    /// Same relay rules as text messages.
    async fn handle_image(&mut self, client_id: ClientId, data: String) {
        let Some(nickname) = self.sender_nickname(client_id) else {
            return;
        };

        self.send_to_all_except(client_id, ServerEvent::Image { nickname, data })
            .await;
    }

    /// Helper: nickname of a connection, None if unknown or anonymous
    fn sender_nickname(&self, client_id: ClientId) -> Option<Nickname> {
        self.connections
            .get(&client_id)
            .and_then(|c| c.nickname.clone())
    }

    /// Helper: send an event to a single connection
    async fn send_to(&self, client_id: ClientId, event: ServerEvent) {
        if let Some(connection) = self.connections.get(&client_id) {
            let _ = connection.send(event).await;
        }
    }

    /// Helper: send an event to every open connection
    ///
    /// A recipient whose channel is closed is skipped; one unreachable
    /// connection never blocks delivery to the rest.
    async fn send_to_all(&self, event: ServerEvent) {
        for connection in self.connections.values() {
            let _ = connection.send(event.clone()).await;
        }
    }

    /// Helper: send an event to every open connection except one
    async fn send_to_all_except(&self, except: ClientId, event: ServerEvent) {
        for connection in self.connections.values().filter(|c| c.id != except) {
            let _ = connection.send(event.clone()).await;
        }
    }
}
