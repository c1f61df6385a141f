use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::bids::BidStatus;
use crate::models::messages;

// ── Client -> Server messages ──

/// Messages the client sends to the server over WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ephemeral typing indicator, relayed verbatim to the recipient.
    Typing {
        conversation_id: Uuid,
        recipient_id: Uuid,
    },
    /// Liveness probe; answered with `pong` to the sender only.
    Ping,
}

// ── Server -> Client messages ──

/// Messages the server pushes to a client over WebSocket.
///
/// These are best-effort: a client that is offline when the push happens
/// never receives it. Durable notifications are persisted separately and
/// polled over REST.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A new bid arrived on one of the recipient's jobs.
    NewBid {
        job_id: Uuid,
        bid_id: Uuid,
        message: String,
    },
    /// The status of one of the recipient's bids changed.
    BidUpdate {
        bid_id: Uuid,
        status: BidStatus,
        message: String,
    },
    /// A new chat message in one of the recipient's conversations.
    NewMessage {
        conversation_id: Uuid,
        message: messages::Model,
    },
    /// The other participant is typing.
    Typing {
        conversation_id: Uuid,
        user_id: Uuid,
    },
    /// Reply to a client `ping`.
    Pong,
    /// An error occurred handling a client message.
    Error { message: String },
}
