use sea_orm::*;
use uuid::Uuid;

use crate::models::transactions::{self, TransactionType};

/// A user's transaction history, newest first.
pub async fn get_transactions_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<transactions::Model>, DbErr> {
    transactions::Entity::find()
        .filter(transactions::Column::UserId.eq(user_id))
        .order_by_desc(transactions::Column::CreatedAt)
        .all(db)
        .await
}

/// A user's completed earnings, newest first. Used by the worker dashboard.
pub async fn get_earnings_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<transactions::Model>, DbErr> {
    transactions::Entity::find()
        .filter(transactions::Column::UserId.eq(user_id))
        .filter(transactions::Column::Type.eq(TransactionType::Earning))
        .order_by_desc(transactions::Column::CreatedAt)
        .all(db)
        .await
}
