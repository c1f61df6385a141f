//! Wallet ledger: applies a signed monetary transaction to a user's balance.
//!
//! The transaction insert and the balance update are one database
//! transaction, and the balance change is a store-level increment
//! expression. A crash can never leave a transaction row without its
//! matching balance change, and concurrent transactions for the same user
//! never lose updates.

use sea_orm::prelude::{Decimal, Expr};
use sea_orm::*;
use uuid::Uuid;

use crate::models::transactions::{self, TransactionStatus, TransactionType};
use crate::models::users;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("transaction amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("user {0} not found")]
    UserNotFound(Uuid),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Free-form description/reference metadata attached to a transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionMeta {
    pub description: Option<String>,
    pub reference_id: Option<String>,
    pub reference_type: Option<String>,
}

/// Insert an immutable transaction row and apply its signed delta to the
/// user's wallet balance, atomically.
///
/// Credit, deposit, and earning increase the balance; debit, withdrawal, and
/// payment decrease it. No non-negative floor is enforced on the balance.
pub async fn apply_transaction(
    db: &DatabaseConnection,
    user_id: Uuid,
    r#type: TransactionType,
    amount: Decimal,
    meta: TransactionMeta,
) -> Result<transactions::Model, LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }

    let txn = db.begin().await?;

    let row = transactions::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        r#type: Set(r#type),
        amount: Set(amount),
        description: Set(meta.description),
        reference_id: Set(meta.reference_id),
        reference_type: Set(meta.reference_type),
        status: Set(TransactionStatus::Completed),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(&txn)
    .await?;

    let delta = r#type.signed_delta(amount);
    let updated = users::Entity::update_many()
        .col_expr(
            users::Column::WalletBalance,
            Expr::col(users::Column::WalletBalance).add(delta),
        )
        .filter(users::Column::Id.eq(user_id))
        .exec(&txn)
        .await?;

    if updated.rows_affected == 0 {
        // Unknown user: roll back the insert too.
        txn.rollback().await?;
        return Err(LedgerError::UserNotFound(user_id));
    }

    txn.commit().await?;

    tracing::debug!(
        user_id = %user_id,
        transaction_id = %row.id,
        %delta,
        "applied ledger transaction"
    );

    Ok(row)
}
