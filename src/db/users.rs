use sea_orm::prelude::Decimal;
use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, Availability, CreateUserFromAuth, UpdateProfile, WorkerQuery};

/// Create a new user from auth JWT claims (called by the auth extractor).
pub async fn find_or_create_from_auth(
    db: &DatabaseConnection,
    input: CreateUserFromAuth,
) -> Result<users::Model, DbErr> {
    // Try to find the user first (by auth-provider UUID).
    if let Some(existing) = users::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    // User doesn't exist yet — create from JWT claims.
    let new_user = users::ActiveModel {
        id: Set(input.id),
        email: Set(input.email),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        profile_image_url: Set(input.profile_image_url),
        phone: Set(None),
        role: Set(input.role),
        bio: Set(None),
        location: Set(None),
        skills: Set(None),
        experience: Set(0),
        hourly_rate: Set(None),
        availability: Set(Availability::Available),
        rating: Set(Decimal::ZERO),
        total_jobs: Set(0),
        wallet_balance: Set(Decimal::ZERO),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_user.insert(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Update the authenticated user's own profile.
pub async fn update_profile(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateProfile,
) -> Result<users::Model, DbErr> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("User not found".to_string()))?;

    let mut active: users::ActiveModel = user.into();

    if let Some(first_name) = input.first_name {
        active.first_name = Set(Some(first_name));
    }
    if let Some(last_name) = input.last_name {
        active.last_name = Set(Some(last_name));
    }
    if let Some(profile_image_url) = input.profile_image_url {
        active.profile_image_url = Set(Some(profile_image_url));
    }
    if let Some(phone) = input.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(role) = input.role {
        active.role = Set(role);
    }
    if let Some(bio) = input.bio {
        active.bio = Set(Some(bio));
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }
    if let Some(skills) = input.skills {
        active.skills = Set(Some(skills));
    }
    if let Some(experience) = input.experience {
        active.experience = Set(experience);
    }
    if let Some(hourly_rate) = input.hourly_rate {
        active.hourly_rate = Set(Some(hourly_rate));
    }
    if let Some(availability) = input.availability {
        active.availability = Set(availability);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// List workers for the directory, best-rated first. Location filters at the
/// query level; skill filtering is applied in application code because skills
/// are a text array.
pub async fn get_workers(
    db: &DatabaseConnection,
    query: &WorkerQuery,
) -> Result<Vec<users::Model>, DbErr> {
    let mut select = users::Entity::find().filter(users::Column::Role.eq("worker"));

    if let Some(location) = &query.location {
        select = select.filter(users::Column::Location.eq(location.clone()));
    }

    let workers = select
        .order_by_desc(users::Column::Rating)
        .all(db)
        .await?;

    let wanted = query.skill_list();
    if wanted.is_empty() {
        return Ok(workers);
    }

    Ok(workers
        .into_iter()
        .filter(|w| {
            w.skills.as_ref().is_some_and(|skills| {
                wanted
                    .iter()
                    .all(|s| skills.iter().any(|have| have.eq_ignore_ascii_case(s)))
            })
        })
        .collect())
}
