use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use futures_util::StreamExt;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::ws::protocol::{ClientMessage, ServerMessage};
use crate::ws::server::{ConnectionRegistry, Registration};

/// Query params for the WebSocket handshake endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// GET /api/ws?token=<jwt>
///
/// Upgrades the HTTP connection to a WebSocket and registers it for push
/// notifications. The identity is taken from the validated JWT, never from a
/// client-chosen parameter (browsers can't send Authorization headers during
/// the WebSocket handshake, hence the query param).
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<WsQuery>,
    jwks_cache: web::Data<Arc<JwksCache>>,
    registry: web::Data<Arc<ConnectionRegistry>>,
) -> Result<HttpResponse, actix_web::Error> {
    let claims = jwt::validate_token(&query.token, jwks_cache.get_ref())
        .await
        .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    let user_id = claims
        .user_id()
        .map_err(actix_web::error::ErrorUnauthorized)?;

    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    let registration = registry.register(user_id).await;
    tracing::info!(%user_id, conn_id = registration.conn_id, "websocket connected");

    let registry_clone = registry.get_ref().clone();
    actix_web::rt::spawn(handle_ws_session(
        session,
        msg_stream,
        registration,
        user_id,
        registry_clone,
    ));

    Ok(response)
}

/// Drives the WebSocket session: reads incoming control messages from the
/// client, forwards pushed messages from the registry, and cleans up on
/// disconnect.
async fn handle_ws_session(
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
    mut registration: Registration,
    user_id: Uuid,
    registry: Arc<ConnectionRegistry>,
) {
    loop {
        tokio::select! {
            // Incoming message from the WebSocket client.
            msg = msg_stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        handle_client_message(&text, &mut session, user_id, &registry).await;
                    }
                    Some(Ok(Message::Ping(bytes))) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) => {
                        break;
                    }
                    // Transport error or stream end: the connection is gone.
                    Some(Err(_)) | None => {
                        break;
                    }
                    _ => {}
                }
            }
            // Outgoing message pushed through the registry.
            pushed = registration.receiver.recv() => {
                match pushed {
                    Some(server_msg) => {
                        let json = match serde_json::to_string(&server_msg) {
                            Ok(j) => j,
                            Err(_) => continue,
                        };
                        if session.text(json).await.is_err() {
                            break;
                        }
                    }
                    // Channel closed: this connection was replaced by a newer
                    // one for the same user.
                    None => break,
                }
            }
        }
    }

    registry.unregister(user_id, registration.conn_id).await;
    tracing::info!(%user_id, conn_id = registration.conn_id, "websocket disconnected");
    let _ = session.close(None).await;
}

/// Parse and handle an incoming client control message.
async fn handle_client_message(
    text: &str,
    session: &mut actix_ws::Session,
    user_id: Uuid,
    registry: &ConnectionRegistry,
) {
    let client_msg: ClientMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            let err = ServerMessage::Error {
                message: format!("Invalid message format: {e}"),
            };
            let _ = session
                .text(serde_json::to_string(&err).unwrap_or_default())
                .await;
            return;
        }
    };

    match client_msg {
        ClientMessage::Typing {
            conversation_id,
            recipient_id,
        } => {
            // Relay the indicator to the recipient; dropped silently if they
            // are offline.
            registry
                .push(
                    recipient_id,
                    ServerMessage::Typing {
                        conversation_id,
                        user_id,
                    },
                )
                .await;
        }

        ClientMessage::Ping => {
            let pong = ServerMessage::Pong;
            let _ = session
                .text(serde_json::to_string(&pong).unwrap_or_default())
                .await;
        }
    }
}
