use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `conversations` table.
///
/// A conversation is an unordered pair of participants, optionally tied to a
/// job. `last_message_at` orders the inbox and is bumped on every new message.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub participant1_id: Uuid,
    pub participant2_id: Uuid,
    pub job_id: Option<Uuid>,
    pub last_message_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

impl Model {
    /// The participant that is not `user_id`. Falls back to participant1 if
    /// `user_id` is not a participant at all; callers authorize first.
    pub fn other_participant(&self, user_id: Uuid) -> Uuid {
        if self.participant1_id == user_id {
            self.participant2_id
        } else {
            self.participant1_id
        }
    }

    pub fn has_participant(&self, user_id: Uuid) -> bool {
        self.participant1_id == user_id || self.participant2_id == user_id
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::jobs::Entity",
        from = "Column::JobId",
        to = "super::jobs::Column::Id"
    )]
    Job,
    #[sea_orm(has_many = "super::messages::Entity")]
    Messages,
}

impl Related<super::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /api/conversations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversationRequest {
    pub other_user_id: Uuid,
    pub job_id: Option<Uuid>,
}
