use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::messages::{self, CreateMessage};

/// Insert a new message.
pub async fn insert_message(
    db: &DatabaseConnection,
    input: CreateMessage,
) -> Result<messages::Model, DbErr> {
    let new_message = messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        conversation_id: Set(input.conversation_id),
        sender_id: Set(input.sender_id),
        content: Set(input.content),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
    };

    new_message.insert(db).await
}

/// Messages in a conversation, oldest first.
pub async fn get_messages_by_conversation(
    db: &DatabaseConnection,
    conversation_id: Uuid,
) -> Result<Vec<messages::Model>, DbErr> {
    messages::Entity::find()
        .filter(messages::Column::ConversationId.eq(conversation_id))
        .order_by_asc(messages::Column::CreatedAt)
        .all(db)
        .await
}

/// Mark all messages in a conversation as read for a recipient (i.e.
/// messages NOT sent by them). Returns the number of rows touched.
pub async fn mark_all_read_for_conversation(
    db: &DatabaseConnection,
    conversation_id: Uuid,
    reader_id: Uuid,
) -> Result<u64, DbErr> {
    let result = messages::Entity::update_many()
        .col_expr(messages::Column::IsRead, Expr::value(true))
        .filter(messages::Column::ConversationId.eq(conversation_id))
        .filter(messages::Column::SenderId.ne(reader_id))
        .filter(messages::Column::IsRead.eq(false))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Count unread messages in a conversation for a specific user.
pub async fn count_unread_for_conversation(
    db: &DatabaseConnection,
    conversation_id: Uuid,
    user_id: Uuid,
) -> Result<u64, DbErr> {
    messages::Entity::find()
        .filter(messages::Column::ConversationId.eq(conversation_id))
        .filter(messages::Column::SenderId.ne(user_id))
        .filter(messages::Column::IsRead.eq(false))
        .count(db)
        .await
}
