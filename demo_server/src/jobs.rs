//! Hiring Job entity: types, validation rules, the PostgreSQL store,
//! and the handlers composed around the generated five.

use async_trait::async_trait;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use roster_sdk::{
    created, safe_parse, success_page, AppError, EntityState, EntityStore, PageMeta, PageParams,
    StoreError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

const JOB_COLUMNS: &str = "id, title, department, status, created_at";

const STATUSES: &[&str] = &["OPEN", "ON_HOLD", "CLOSED"];

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct CreateJob {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "department must be 1-100 characters"))]
    pub department: String,
    #[serde(default = "default_status")]
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

#[derive(Deserialize, Validate, Debug, Default)]
pub struct UpdateJob {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "department must be 1-100 characters"))]
    pub department: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

fn default_status() -> String {
    "OPEN".into()
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    if STATUSES.contains(&status) {
        return Ok(());
    }
    let mut err = validator::ValidationError::new("status");
    err.message = Some("status must be one of OPEN, ON_HOLD, CLOSED".into());
    Err(err)
}

/// Demo schema bootstrap. Idempotent.
pub async fn ensure_jobs_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS jobs (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL UNIQUE,
            department TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'OPEN',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        PgJobStore { pool }
    }

    /// Open jobs plus a count filtered the same way, so page math
    /// reflects what the caller actually sees.
    pub async fn find_open(&self, skip: u64, take: u64) -> Result<(Vec<Job>, u64), StoreError> {
        let sql = format!(
            "SELECT {} FROM jobs WHERE status = 'OPEN' ORDER BY id DESC LIMIT $1 OFFSET $2",
            JOB_COLUMNS
        );
        let rows = sqlx::query_as::<_, Job>(&sql)
            .bind(take as i64)
            .bind(skip as i64)
            .fetch_all(&self.pool)
            .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE status = 'OPEN'")
            .fetch_one(&self.pool)
            .await?;
        Ok((rows, total as u64))
    }

    pub async fn title_exists(&self, title: &str) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM jobs WHERE title = $1)")
            .bind(title)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

#[async_trait]
impl EntityStore for PgJobStore {
    type Id = Uuid;
    type Record = Job;
    type Create = CreateJob;
    type Update = UpdateJob;

    async fn find_page(&self, skip: u64, take: u64) -> Result<Vec<Job>, StoreError> {
        let sql = format!(
            "SELECT {} FROM jobs ORDER BY id DESC LIMIT $1 OFFSET $2",
            JOB_COLUMNS
        );
        let rows = sqlx::query_as::<_, Job>(&sql)
            .bind(take as i64)
            .bind(skip as i64)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(total as u64)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Job>, StoreError> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        let row = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, input: CreateJob) -> Result<Job, StoreError> {
        let sql = format!(
            "INSERT INTO jobs (id, title, department, status) VALUES ($1, $2, $3, $4) RETURNING {}",
            JOB_COLUMNS
        );
        let row = sqlx::query_as::<_, Job>(&sql)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(&input.department)
            .bind(&input.status)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: &Uuid, patch: UpdateJob) -> Result<Job, StoreError> {
        let sql = format!(
            "UPDATE jobs SET title = COALESCE($2, title), department = COALESCE($3, department), \
             status = COALESCE($4, status) WHERE id = $1 RETURNING {}",
            JOB_COLUMNS
        );
        let row = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .bind(patch.title)
            .bind(patch.department)
            .bind(patch.status)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: &Uuid) -> Result<Job, StoreError> {
        let sql = format!("DELETE FROM jobs WHERE id = $1 RETURNING {}", JOB_COLUMNS);
        let row = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}

fn job_error(err: StoreError) -> AppError {
    match err {
        StoreError::UniqueViolation => AppError::Conflict("Job already exists".into()),
        StoreError::ForeignKeyViolation => {
            AppError::NotFound("related record for Job not found".into())
        }
        StoreError::NotFound => AppError::NotFound("Job not found".into()),
        StoreError::Other(msg) => {
            tracing::error!(error = %msg, "storage failure");
            AppError::Internal("failed to write Job".into())
        }
    }
}

/// Replaces the generated create: a duplicate-title pre-check ahead of
/// the insert, against the store directly.
pub async fn create_job(
    State(service): State<EntityState<PgJobStore>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let input: CreateJob = safe_parse(service.config().entity, body)?;
    if service.store().title_exists(&input.title).await.map_err(job_error)? {
        return Err(AppError::Conflict(format!(
            "Job '{}' already exists",
            input.title
        )));
    }
    let record = service.store().insert(input).await.map_err(job_error)?;
    Ok(created(record))
}

/// Added beside the generated routes: open jobs only. The count is
/// filtered identically, so `totalPages` reflects the filtered total.
pub async fn open_jobs(
    State(service): State<EntityState<PgJobStore>>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = params.resolve(service.config());
    let skip = (page - 1).saturating_mul(limit);
    let (records, total) = service
        .store()
        .find_open(skip, limit)
        .await
        .map_err(job_error)?;
    Ok(success_page(records, PageMeta::new(total, page, limit)))
}
