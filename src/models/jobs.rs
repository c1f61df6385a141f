use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Job lifecycle status, managed by the employer via `PATCH /api/jobs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// How the budget (and bid rates) are quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum BudgetType {
    #[sea_orm(string_value = "hourly")]
    Hourly,
    #[sea_orm(string_value = "fixed")]
    Fixed,
    #[sea_orm(string_value = "daily")]
    Daily,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "expert")]
    Expert,
}

/// SeaORM entity for the `jobs` table.
///
/// `bids_count` is maintained by an atomic `+ 1` column expression on bid
/// creation, never recomputed from the bids table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employer_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub budget_min: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub budget_max: Option<Decimal>,
    pub budget_type: BudgetType,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub status: JobStatus,
    pub bids_count: i32,
    pub posted_at: DateTimeUtc,
    pub deadline: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EmployerId",
        to = "super::users::Column::Id"
    )]
    Employer,
    #[sea_orm(
        belongs_to = "super::job_categories::Entity",
        from = "Column::CategoryId",
        to = "super::job_categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employer.def()
    }
}

impl Related<super::job_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub category_id: Option<Uuid>,
    pub requirements: Option<String>,
    pub budget_min: Option<Decimal>,
    pub budget_max: Option<Decimal>,
    pub budget_type: Option<BudgetType>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub deadline: Option<DateTimeUtc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub requirements: Option<String>,
    pub budget_min: Option<Decimal>,
    pub budget_max: Option<Decimal>,
    pub budget_type: Option<BudgetType>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub status: Option<JobStatus>,
    pub deadline: Option<DateTimeUtc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobListQuery {
    pub category: Option<Uuid>,
    pub location: Option<String>,
    pub status: Option<JobStatus>,
}
