use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Equipment availability. Set manually by the owner; there is no rental
/// booking entity deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ToolAvailability {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "rented")]
    Rented,
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
}

/// SeaORM entity for the `tools` table (rentable equipment listings).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tools")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub specifications: Option<Json>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub daily_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub hourly_rate: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub weekly_rate: Option<Decimal>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub availability: ToolAvailability,
    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub rating: Decimal,
    pub total_rentals: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::tool_categories::Entity",
        from = "Column::CategoryId",
        to = "super::tool_categories::Column::Id"
    )]
    Category,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::tool_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTool {
    pub name: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub specifications: Option<Json>,
    pub daily_rate: Decimal,
    pub hourly_rate: Option<Decimal>,
    pub weekly_rate: Option<Decimal>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTool {
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub specifications: Option<Json>,
    pub daily_rate: Option<Decimal>,
    pub hourly_rate: Option<Decimal>,
    pub weekly_rate: Option<Decimal>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub availability: Option<ToolAvailability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolListQuery {
    pub category: Option<Uuid>,
    pub location: Option<String>,
}
