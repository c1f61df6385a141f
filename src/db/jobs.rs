use sea_orm::*;
use uuid::Uuid;

use crate::models::jobs::{self, BudgetType, CreateJob, JobListQuery, JobStatus, UpdateJob};

/// Insert a new job (defaults to Open status, zero bids).
pub async fn insert_job(
    db: &DatabaseConnection,
    input: CreateJob,
    employer_id: Uuid,
) -> Result<jobs::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_job = jobs::ActiveModel {
        id: Set(Uuid::new_v4()),
        employer_id: Set(employer_id),
        category_id: Set(input.category_id),
        title: Set(input.title),
        description: Set(input.description),
        requirements: Set(input.requirements),
        budget_min: Set(input.budget_min),
        budget_max: Set(input.budget_max),
        budget_type: Set(input.budget_type.unwrap_or(BudgetType::Fixed)),
        location: Set(input.location),
        duration: Set(input.duration),
        experience_level: Set(input.experience_level),
        status: Set(JobStatus::Open),
        bids_count: Set(0),
        posted_at: Set(now),
        deadline: Set(input.deadline),
        created_at: Set(now),
        updated_at: Set(None),
    };

    new_job.insert(db).await
}

/// List jobs, newest first, with optional filters.
pub async fn get_jobs(
    db: &DatabaseConnection,
    query: &JobListQuery,
) -> Result<Vec<jobs::Model>, DbErr> {
    let mut select = jobs::Entity::find();

    if let Some(category) = query.category {
        select = select.filter(jobs::Column::CategoryId.eq(category));
    }
    if let Some(location) = &query.location {
        select = select.filter(jobs::Column::Location.eq(location.clone()));
    }
    if let Some(status) = &query.status {
        select = select.filter(jobs::Column::Status.eq(status.clone()));
    }

    select.order_by_desc(jobs::Column::PostedAt).all(db).await
}

/// Fetch a single job by ID.
pub async fn get_job_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<jobs::Model>, DbErr> {
    jobs::Entity::find_by_id(id).one(db).await
}

/// Jobs posted by a specific employer, newest first.
pub async fn get_jobs_by_employer(
    db: &DatabaseConnection,
    employer_id: Uuid,
) -> Result<Vec<jobs::Model>, DbErr> {
    jobs::Entity::find()
        .filter(jobs::Column::EmployerId.eq(employer_id))
        .order_by_desc(jobs::Column::PostedAt)
        .all(db)
        .await
}

/// Update a job's mutable fields (including status).
pub async fn update_job(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateJob,
) -> Result<jobs::Model, DbErr> {
    let job = jobs::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Job not found".to_string()))?;

    let mut active: jobs::ActiveModel = job.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(category_id) = input.category_id {
        active.category_id = Set(Some(category_id));
    }
    if let Some(requirements) = input.requirements {
        active.requirements = Set(Some(requirements));
    }
    if let Some(budget_min) = input.budget_min {
        active.budget_min = Set(Some(budget_min));
    }
    if let Some(budget_max) = input.budget_max {
        active.budget_max = Set(Some(budget_max));
    }
    if let Some(budget_type) = input.budget_type {
        active.budget_type = Set(budget_type);
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }
    if let Some(duration) = input.duration {
        active.duration = Set(Some(duration));
    }
    if let Some(experience_level) = input.experience_level {
        active.experience_level = Set(Some(experience_level));
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(deadline) = input.deadline {
        active.deadline = Set(Some(deadline));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
