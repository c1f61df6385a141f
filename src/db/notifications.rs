use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::notifications::{self, CreateNotification};

/// Insert a persisted notification (the durable, polled side of the
/// notification system).
pub async fn insert_notification(
    db: &DatabaseConnection,
    input: CreateNotification,
) -> Result<notifications::Model, DbErr> {
    let new_notification = notifications::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(input.user_id),
        r#type: Set(input.r#type),
        title: Set(input.title),
        message: Set(input.message),
        link: Set(input.link),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
    };

    new_notification.insert(db).await
}

/// A user's notifications, newest first.
pub async fn get_notifications_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<notifications::Model>, DbErr> {
    notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .order_by_desc(notifications::Column::CreatedAt)
        .all(db)
        .await
}

/// Mark one of `user_id`'s notifications as read. Scoped to the owner so a
/// caller cannot touch someone else's notification. Returns the rows touched
/// so the handler can 404 on an unknown (or foreign) id.
pub async fn mark_notification_read(
    db: &DatabaseConnection,
    id: Uuid,
    user_id: Uuid,
) -> Result<u64, DbErr> {
    let result = notifications::Entity::update_many()
        .col_expr(notifications::Column::IsRead, Expr::value(true))
        .filter(notifications::Column::Id.eq(id))
        .filter(notifications::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
