use sea_orm::*;

use crate::models::{job_categories, tool_categories};

/// All job categories, alphabetical.
pub async fn get_job_categories(
    db: &DatabaseConnection,
) -> Result<Vec<job_categories::Model>, DbErr> {
    job_categories::Entity::find()
        .order_by_asc(job_categories::Column::Name)
        .all(db)
        .await
}

/// All tool categories, alphabetical.
pub async fn get_tool_categories(
    db: &DatabaseConnection,
) -> Result<Vec<tool_categories::Model>, DbErr> {
    tool_categories::Entity::find()
        .order_by_asc(tool_categories::Column::Name)
        .all(db)
        .await
}
