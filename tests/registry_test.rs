///! Tests for the in-memory WebSocket connection registry: best-effort
///! delivery, last-connection-wins replacement, and the stale-unregister
///! guard.
///!
///! No running server is needed; the registry is driven directly.
///!
///! Run with: `cargo test --test registry_test`
use uuid::Uuid;

use labourmandi_backend::ws::protocol::ServerMessage;
use labourmandi_backend::ws::server::ConnectionRegistry;

fn pong() -> ServerMessage {
    ServerMessage::Pong
}

#[tokio::test]
async fn test_push_delivers_to_registered_connection() {
    let registry = ConnectionRegistry::new();
    let user = Uuid::new_v4();

    let mut registration = registry.register(user).await;
    registry
        .push(
            user,
            ServerMessage::Error {
                message: "hello".to_string(),
            },
        )
        .await;

    match registration.receiver.recv().await {
        Some(ServerMessage::Error { message }) => assert_eq!(message, "hello"),
        other => panic!("expected error message, got {other:?}"),
    }
}

#[tokio::test]
async fn test_push_to_offline_user_is_a_noop() {
    let registry = ConnectionRegistry::new();
    // Nothing registered; must not panic or error.
    registry.push(Uuid::new_v4(), pong()).await;
}

#[tokio::test]
async fn test_second_connection_replaces_the_first() {
    let registry = ConnectionRegistry::new();
    let user = Uuid::new_v4();

    let mut first = registry.register(user).await;
    let mut second = registry.register(user).await;
    assert_ne!(first.conn_id, second.conn_id);

    // The first connection's channel is closed by the replacement, which is
    // how its session loop learns it was superseded.
    assert!(first.receiver.recv().await.is_none());

    // Pushes now land on the second connection only.
    registry.push(user, pong()).await;
    assert!(matches!(
        second.receiver.recv().await,
        Some(ServerMessage::Pong)
    ));
}

#[tokio::test]
async fn test_stale_unregister_does_not_evict_successor() {
    let registry = ConnectionRegistry::new();
    let user = Uuid::new_v4();

    let first = registry.register(user).await;
    let mut second = registry.register(user).await;

    // The replaced session's cleanup runs late; it must not remove the newer
    // connection.
    registry.unregister(user, first.conn_id).await;
    assert!(registry.is_online(user).await);

    registry.push(user, pong()).await;
    assert!(matches!(
        second.receiver.recv().await,
        Some(ServerMessage::Pong)
    ));

    // The current connection's own unregister does take effect.
    registry.unregister(user, second.conn_id).await;
    assert!(!registry.is_online(user).await);
}

#[tokio::test]
async fn test_messages_are_delivered_in_order() {
    let registry = ConnectionRegistry::new();
    let user = Uuid::new_v4();

    let mut registration = registry.register(user).await;
    for i in 0..3 {
        registry
            .push(
                user,
                ServerMessage::Error {
                    message: i.to_string(),
                },
            )
            .await;
    }

    for expected in ["0", "1", "2"] {
        match registration.receiver.recv().await {
            Some(ServerMessage::Error { message }) => assert_eq!(message, expected),
            other => panic!("expected error message, got {other:?}"),
        }
    }
}
