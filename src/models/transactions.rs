use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Semantic transaction type. Credit-like types increase the wallet balance,
/// debit-like types decrease it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[sea_orm(string_value = "credit")]
    Credit,
    #[sea_orm(string_value = "debit")]
    Debit,
    #[sea_orm(string_value = "deposit")]
    Deposit,
    #[sea_orm(string_value = "withdrawal")]
    Withdrawal,
    #[sea_orm(string_value = "payment")]
    Payment,
    #[sea_orm(string_value = "earning")]
    Earning,
}

impl TransactionType {
    pub fn is_credit(self) -> bool {
        matches!(
            self,
            TransactionType::Credit | TransactionType::Deposit | TransactionType::Earning
        )
    }

    /// The signed balance change for a positive `amount`.
    pub fn signed_delta(self, amount: Decimal) -> Decimal {
        if self.is_credit() { amount } else { -amount }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
}

/// SeaORM entity for the `transactions` table. Rows are immutable once
/// created; the ledger only ever inserts.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub r#type: TransactionType,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub amount: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub reference_id: Option<String>,
    pub reference_type: Option<String>,
    pub status: TransactionStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /api/transactions`. `user_id` comes from the JWT.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionRequest {
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,
    pub reference_id: Option<String>,
    pub reference_type: Option<String>,
}
