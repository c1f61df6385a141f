use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::conversations;

/// Conversations the user participates in, most recently active first.
pub async fn get_conversations_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<conversations::Model>, DbErr> {
    conversations::Entity::find()
        .filter(
            Condition::any()
                .add(conversations::Column::Participant1Id.eq(user_id))
                .add(conversations::Column::Participant2Id.eq(user_id)),
        )
        .order_by_desc(conversations::Column::LastMessageAt)
        .all(db)
        .await
}

/// Fetch a single conversation by ID.
pub async fn get_conversation_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<conversations::Model>, DbErr> {
    conversations::Entity::find_by_id(id).one(db).await
}

/// Find an existing conversation for this (unordered) participant pair, or
/// create one.
pub async fn find_or_create(
    db: &DatabaseConnection,
    user_a: Uuid,
    user_b: Uuid,
    job_id: Option<Uuid>,
) -> Result<conversations::Model, DbErr> {
    let existing = conversations::Entity::find()
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(conversations::Column::Participant1Id.eq(user_a))
                        .add(conversations::Column::Participant2Id.eq(user_b)),
                )
                .add(
                    Condition::all()
                        .add(conversations::Column::Participant1Id.eq(user_b))
                        .add(conversations::Column::Participant2Id.eq(user_a)),
                ),
        )
        .one(db)
        .await?;

    if let Some(conversation) = existing {
        return Ok(conversation);
    }

    let now = chrono::Utc::now();
    let new_conversation = conversations::ActiveModel {
        id: Set(Uuid::new_v4()),
        participant1_id: Set(user_a),
        participant2_id: Set(user_b),
        job_id: Set(job_id),
        last_message_at: Set(now),
        created_at: Set(now),
    };

    new_conversation.insert(db).await
}

/// Bump `last_message_at` after a new message.
pub async fn touch_last_message(db: &DatabaseConnection, id: Uuid) -> Result<(), DbErr> {
    conversations::Entity::update_many()
        .col_expr(
            conversations::Column::LastMessageAt,
            Expr::value(chrono::Utc::now()),
        )
        .filter(conversations::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}
