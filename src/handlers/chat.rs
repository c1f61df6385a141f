use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::conversations as conversation_db;
use crate::db::messages as message_db;
use crate::db::users as user_db;
use crate::models::conversations::CreateConversationRequest;
use crate::models::messages::{CreateMessage, SendMessageRequest};
use crate::ws::protocol::ServerMessage;
use crate::ws::server::ConnectionRegistry;

/// GET /api/conversations — the user's inbox, most recently active first,
/// with an unread message count per conversation.
pub async fn get_conversations(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let conversations = match conversation_db::get_conversations_by_user(db.get_ref(), user.0.id).await
    {
        Ok(conversations) => conversations,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch conversations: {e}"),
            }));
        }
    };

    let mut enriched = Vec::with_capacity(conversations.len());
    for conversation in conversations {
        let unread =
            match message_db::count_unread_for_conversation(db.get_ref(), conversation.id, user.0.id)
                .await
            {
                Ok(count) => count,
                Err(e) => {
                    return HttpResponse::InternalServerError().json(serde_json::json!({
                        "error": format!("Failed to count unread messages: {e}"),
                    }));
                }
            };
        let other_participant = conversation.other_participant(user.0.id);
        enriched.push(serde_json::json!({
            "conversation": conversation,
            "other_participant_id": other_participant,
            "unread_count": unread,
        }));
    }

    HttpResponse::Ok().json(enriched)
}

/// POST /api/conversations — open (or reuse) a conversation with another user.
pub async fn create_conversation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateConversationRequest>,
) -> impl Responder {
    let input = body.into_inner();

    if input.other_user_id == user.0.id {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "You cannot start a conversation with yourself",
        }));
    }

    // The other participant must exist.
    match user_db::get_user_by_id(db.get_ref(), input.other_user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("User {} not found", input.other_user_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match conversation_db::find_or_create(db.get_ref(), user.0.id, input.other_user_id, input.job_id)
        .await
    {
        Ok(conversation) => HttpResponse::Ok().json(conversation),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create conversation: {e}"),
        })),
    }
}

/// GET /api/conversations/{id}/messages — message history, oldest first.
/// Reading the history marks the other side's messages as read.
pub async fn get_messages(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let conversation_id = path.into_inner();

    let conversation = match conversation_db::get_conversation_by_id(db.get_ref(), conversation_id)
        .await
    {
        Ok(Some(conversation)) => conversation,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Conversation {conversation_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if !conversation.has_participant(user.0.id) {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not a participant in this conversation",
        }));
    }

    if let Err(e) =
        message_db::mark_all_read_for_conversation(db.get_ref(), conversation_id, user.0.id).await
    {
        tracing::warn!(conversation_id = %conversation_id, "failed to mark messages read: {e}");
    }

    match message_db::get_messages_by_conversation(db.get_ref(), conversation_id).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch messages: {e}"),
        })),
    }
}

/// POST /api/conversations/{id}/messages — send a message. The stored row is
/// relayed verbatim to the other participant's live connection if they have
/// one.
pub async fn send_message(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    registry: web::Data<Arc<ConnectionRegistry>>,
    path: web::Path<Uuid>,
    body: web::Json<SendMessageRequest>,
) -> impl Responder {
    let conversation_id = path.into_inner();
    let input = body.into_inner();

    if input.content.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": ["content must not be empty"],
        }));
    }

    let conversation = match conversation_db::get_conversation_by_id(db.get_ref(), conversation_id)
        .await
    {
        Ok(Some(conversation)) => conversation,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Conversation {conversation_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if !conversation.has_participant(user.0.id) {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not a participant in this conversation",
        }));
    }

    let message = match message_db::insert_message(
        db.get_ref(),
        CreateMessage {
            conversation_id,
            sender_id: user.0.id,
            content: input.content,
        },
    )
    .await
    {
        Ok(message) => message,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to send message: {e}"),
            }));
        }
    };

    if let Err(e) = conversation_db::touch_last_message(db.get_ref(), conversation_id).await {
        tracing::warn!(conversation_id = %conversation_id, "failed to bump last_message_at: {e}");
    }

    let recipient = conversation.other_participant(user.0.id);
    registry
        .push(
            recipient,
            ServerMessage::NewMessage {
                conversation_id,
                message: message.clone(),
            },
        )
        .await;

    HttpResponse::Created().json(message)
}
