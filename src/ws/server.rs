use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::ws::protocol::ServerMessage;

/// A handle to send messages to a connected WebSocket client.
#[derive(Debug)]
struct ClientHandle {
    conn_id: u64,
    sender: mpsc::UnboundedSender<ServerMessage>,
}

/// A successful registration: the session loop reads pushed messages from
/// `receiver` and passes `conn_id` back on unregister.
#[derive(Debug)]
pub struct Registration {
    pub conn_id: u64,
    pub receiver: mpsc::UnboundedReceiver<ServerMessage>,
}

/// In-memory registry of live WebSocket connections, one per user.
///
/// A second connection for the same user replaces the first
/// (last-connection-wins); dropping the replaced handle closes its channel,
/// which terminates the old session loop. The registry is process-local and
/// does not survive restarts — delivery through it is best-effort only.
pub struct ConnectionRegistry {
    clients: RwLock<HashMap<Uuid, ClientHandle>>,
    next_conn_id: AtomicU64,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            next_conn_id: AtomicU64::new(1),
        }
    }

    /// Register a connection for a user, replacing any existing one.
    /// Returns a receiver the WebSocket session should listen on.
    pub async fn register(&self, user_id: Uuid) -> Registration {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn_id = self.next_conn_id.fetch_add(1, Ordering::Relaxed);

        let mut clients = self.clients.write().await;
        if let Some(old) = clients.insert(
            user_id,
            ClientHandle {
                conn_id,
                sender: tx,
            },
        ) {
            tracing::debug!(%user_id, old_conn = old.conn_id, "replaced existing connection");
        }

        Registration {
            conn_id,
            receiver: rx,
        }
    }

    /// Remove a user's connection, but only if it is still the one identified
    /// by `conn_id` — a close event from a replaced connection must not evict
    /// its successor.
    pub async fn unregister(&self, user_id: Uuid, conn_id: u64) {
        let mut clients = self.clients.write().await;
        if clients.get(&user_id).is_some_and(|c| c.conn_id == conn_id) {
            clients.remove(&user_id);
        }
    }

    /// Best-effort push: deliver `message` to the user's live connection if
    /// there is one, otherwise drop it silently. Never fails.
    pub async fn push(&self, user_id: Uuid, message: ServerMessage) {
        let clients = self.clients.read().await;
        if let Some(client) = clients.get(&user_id) {
            // A failed send means the receiver was just dropped; the session
            // cleanup will unregister it.
            if client.sender.send(message).is_err() {
                tracing::debug!(%user_id, "dropped push to closing connection");
            }
        }
    }

    /// Whether the user currently has a live connection.
    pub async fn is_online(&self, user_id: Uuid) -> bool {
        self.clients.read().await.contains_key(&user_id)
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
