///! Tests for the WebSocket wire protocol: messages are JSON objects tagged
///! with a snake_case `type` field in both directions.
///!
///! Run with: `cargo test --test protocol_test`
use chrono::Utc;
use uuid::Uuid;

use labourmandi_backend::models::bids::BidStatus;
use labourmandi_backend::models::messages;
use labourmandi_backend::ws::protocol::{ClientMessage, ServerMessage};

#[test]
fn test_client_typing_message_parses() {
    let conversation_id = Uuid::new_v4();
    let recipient_id = Uuid::new_v4();
    let raw = format!(
        r#"{{"type":"typing","conversation_id":"{conversation_id}","recipient_id":"{recipient_id}"}}"#
    );

    match serde_json::from_str::<ClientMessage>(&raw).unwrap() {
        ClientMessage::Typing {
            conversation_id: c,
            recipient_id: r,
        } => {
            assert_eq!(c, conversation_id);
            assert_eq!(r, recipient_id);
        }
        other => panic!("expected typing, got {other:?}"),
    }
}

#[test]
fn test_client_ping_parses() {
    let msg: ClientMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
    assert!(matches!(msg, ClientMessage::Ping));
}

#[test]
fn test_unknown_client_message_type_is_rejected() {
    assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"join_room","room":"x"}"#).is_err());
}

#[test]
fn test_new_bid_serializes_with_type_tag() {
    let msg = ServerMessage::NewBid {
        job_id: Uuid::new_v4(),
        bid_id: Uuid::new_v4(),
        message: "New bid of ₹500 received on your job".to_string(),
    };

    let value: serde_json::Value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["type"], "new_bid");
    assert!(value["job_id"].is_string());
    assert!(value["bid_id"].is_string());
}

#[test]
fn test_bid_update_carries_lowercase_status() {
    let msg = ServerMessage::BidUpdate {
        bid_id: Uuid::new_v4(),
        status: BidStatus::Accepted,
        message: "Your bid has been accepted".to_string(),
    };

    let value: serde_json::Value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["type"], "bid_update");
    assert_eq!(value["status"], "accepted");
}

#[test]
fn test_new_message_embeds_the_stored_row() {
    let row = messages::Model {
        id: Uuid::new_v4(),
        conversation_id: Uuid::new_v4(),
        sender_id: Uuid::new_v4(),
        content: "see you at the site".to_string(),
        is_read: false,
        created_at: Utc::now(),
    };

    let msg = ServerMessage::NewMessage {
        conversation_id: row.conversation_id,
        message: row.clone(),
    };

    let value: serde_json::Value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["type"], "new_message");
    assert_eq!(value["message"]["content"], "see you at the site");
    assert_eq!(value["message"]["id"], row.id.to_string());
}

#[test]
fn test_pong_is_just_a_type_tag() {
    let value: serde_json::Value = serde_json::to_value(ServerMessage::Pong).unwrap();
    assert_eq!(value, serde_json::json!({"type": "pong"}));
}
