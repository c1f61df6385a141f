use sea_orm::prelude::Decimal;
use sea_orm::*;
use uuid::Uuid;

use crate::models::tools::{self, CreateTool, ToolAvailability, ToolListQuery, UpdateTool};

/// Insert a new equipment listing (defaults to Available).
pub async fn insert_tool(
    db: &DatabaseConnection,
    input: CreateTool,
    owner_id: Uuid,
) -> Result<tools::Model, DbErr> {
    let new_tool = tools::ActiveModel {
        id: Set(Uuid::new_v4()),
        owner_id: Set(owner_id),
        category_id: Set(input.category_id),
        name: Set(input.name),
        description: Set(input.description),
        specifications: Set(input.specifications),
        daily_rate: Set(input.daily_rate),
        hourly_rate: Set(input.hourly_rate),
        weekly_rate: Set(input.weekly_rate),
        location: Set(input.location),
        image_url: Set(input.image_url),
        images: Set(input.images),
        availability: Set(ToolAvailability::Available),
        rating: Set(Decimal::ZERO),
        total_rentals: Set(0),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_tool.insert(db).await
}

/// List tools, best-rated first, with optional filters.
pub async fn get_tools(
    db: &DatabaseConnection,
    query: &ToolListQuery,
) -> Result<Vec<tools::Model>, DbErr> {
    let mut select = tools::Entity::find();

    if let Some(category) = query.category {
        select = select.filter(tools::Column::CategoryId.eq(category));
    }
    if let Some(location) = &query.location {
        select = select.filter(tools::Column::Location.eq(location.clone()));
    }

    select.order_by_desc(tools::Column::Rating).all(db).await
}

/// Fetch a single tool by ID.
pub async fn get_tool_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<tools::Model>, DbErr> {
    tools::Entity::find_by_id(id).one(db).await
}

/// Update a listing, including its manually-set availability flag.
pub async fn update_tool(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateTool,
) -> Result<tools::Model, DbErr> {
    let tool = tools::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Tool not found".to_string()))?;

    let mut active: tools::ActiveModel = tool.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(category_id) = input.category_id {
        active.category_id = Set(Some(category_id));
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(specifications) = input.specifications {
        active.specifications = Set(Some(specifications));
    }
    if let Some(daily_rate) = input.daily_rate {
        active.daily_rate = Set(daily_rate);
    }
    if let Some(hourly_rate) = input.hourly_rate {
        active.hourly_rate = Set(Some(hourly_rate));
    }
    if let Some(weekly_rate) = input.weekly_rate {
        active.weekly_rate = Set(Some(weekly_rate));
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }
    if let Some(image_url) = input.image_url {
        active.image_url = Set(Some(image_url));
    }
    if let Some(images) = input.images {
        active.images = Set(Some(images));
    }
    if let Some(availability) = input.availability {
        active.availability = Set(availability);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
