use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::jobs::BudgetType;

/// Bid status stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "withdrawn")]
    Withdrawn,
}

/// Attempted bid-status change that the transition table does not allow.
#[derive(Debug, thiserror::Error)]
#[error("cannot change bid status from {from:?} to {to:?}")]
pub struct TransitionError {
    pub from: BidStatus,
    pub to: BidStatus,
}

impl BidStatus {
    /// Transition table for bid status changes.
    ///
    /// Pending bids can be accepted, rejected, or withdrawn. Accepted,
    /// rejected, and withdrawn are terminal.
    pub fn can_transition_to(self, next: BidStatus) -> bool {
        matches!(
            (self, next),
            (
                BidStatus::Pending,
                BidStatus::Accepted | BidStatus::Rejected | BidStatus::Withdrawn
            )
        )
    }

    pub fn transition_to(self, next: BidStatus) -> Result<BidStatus, TransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(TransitionError {
                from: self,
                to: next,
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
            BidStatus::Withdrawn => "withdrawn",
        }
    }
}

/// SeaORM entity for the `bids` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bids")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub job_id: Uuid,
    pub worker_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub proposed_rate: Decimal,
    pub rate_type: BudgetType,
    pub timeline: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cover_letter: Option<String>,
    pub status: BidStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jobs::Entity",
        from = "Column::JobId",
        to = "super::jobs::Column::Id"
    )]
    Job,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::WorkerId",
        to = "super::users::Column::Id"
    )]
    Worker,
}

impl Related<super::jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /api/jobs/{id}/bids`.
/// `job_id` comes from the path and `worker_id` from the JWT.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBidRequest {
    pub proposed_rate: Decimal,
    pub rate_type: Option<BudgetType>,
    pub timeline: Option<String>,
    pub cover_letter: Option<String>,
}

/// Internal input for bid insertion.
#[derive(Debug, Clone)]
pub struct CreateBid {
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub proposed_rate: Decimal,
    pub rate_type: BudgetType,
    pub timeline: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBidStatus {
    pub status: BidStatus,
}
