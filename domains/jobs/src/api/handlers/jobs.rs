//! Job posting API handlers
//!
//! Implements job CRUD operations:
//! - GET /jobs - List postings with search, pagination and author expansion
//! - GET /jobs/{id} - Get a single posting
//! - POST /jobs - Create a posting
//! - PUT /jobs/{id} - Update a posting
//! - PATCH /jobs/{id}/status - Update only the posting status
//! - DELETE /jobs/{id} - Delete a posting

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use talentboard_common::{Page, Pagination, Result, ValidatedJson};

use crate::api::state::JobsState;
use crate::domain::entities::{Job, JobStatus, JobType};
use crate::repository::{JobPatch, JobWithAuthorRow};

/// Success messages preserved from the legacy API
const JOB_CREATED: &str = "Vaga cadastrada com sucesso!";
const JOB_UPDATED: &str = "Vaga atualizada com sucesso!";
const JOB_STATUS_UPDATED: &str = "Status da vaga atualizado com sucesso!";
const JOB_DELETED: &str = "Vaga deletada com sucesso!";

/// Job response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub city: String,
    pub department: String,
    pub description: String,
    pub status: JobStatus,
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            name: job.name,
            job_type: job.job_type,
            city: job.city,
            department: job.department,
            description: job.description,
            status: job.status,
            author: job.author,
            created_at: job.created_at,
        }
    }
}

/// Author object embedded in listings. Status and type come across as
/// plain text since they belong to the users domain; the password hash is
/// never selected.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAuthor {
    pub id: Uuid,
    pub name: String,
    pub picture: Option<String>,
    pub email: String,
    pub status: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing row: a posting with its author expanded. A dangling author
/// reference serializes as `author: null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobWithAuthorResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub city: String,
    pub department: String,
    pub description: String,
    pub status: JobStatus,
    pub author: Option<JobAuthor>,
    pub created_at: DateTime<Utc>,
}

impl From<JobWithAuthorRow> for JobWithAuthorResponse {
    fn from(row: JobWithAuthorRow) -> Self {
        let author = match (row.author_id, row.author_name, row.author_email) {
            (Some(id), Some(name), Some(email)) => Some(JobAuthor {
                id,
                name,
                picture: row.author_picture,
                email,
                status: row.author_status.unwrap_or_default(),
                user_type: row.author_type.unwrap_or_default(),
                resume: row.author_resume,
                created_at: row.author_created_at.unwrap_or(row.created_at),
            }),
            _ => None,
        };

        Self {
            id: row.id,
            name: row.name,
            job_type: row.job_type,
            city: row.city,
            department: row.department,
            description: row.description,
            status: row.status,
            author,
            created_at: row.created_at,
        }
    }
}

/// Query parameters for listing postings
#[derive(Debug, Deserialize)]
pub struct ListJobsParams {
    pub search: Option<String>,
}

/// Request for creating a posting
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,

    #[serde(rename = "type")]
    pub job_type: JobType,

    #[validate(length(min = 1, max = 255, message = "city must be 1-255 characters"))]
    pub city: String,

    #[validate(length(min = 1, max = 255, message = "department must be 1-255 characters"))]
    pub department: String,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,

    pub author: Uuid,

    pub status: Option<JobStatus>,
}

/// Request for updating a posting. Independently defined from the create
/// schema: every field is optional, so a partial payload is accepted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub job_type: Option<JobType>,

    #[validate(length(min = 1, max = 255, message = "city must be 1-255 characters"))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 255, message = "department must be 1-255 characters"))]
    pub department: Option<String>,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,

    pub author: Option<Uuid>,

    pub status: Option<JobStatus>,
}

/// Request for the status-only endpoint. The schema admits nothing but
/// the new status.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobStatusRequest {
    pub status: JobStatus,
}

/// GET /jobs - List postings, newest first, authors expanded
///
/// `search` filters by case-insensitive substring match on name.
pub async fn list_jobs(
    State(state): State<JobsState>,
    Query(params): Query<ListJobsParams>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Page<JobWithAuthorResponse>>> {
    let search = params.search.as_deref();

    let total = state.repos.jobs.count(search).await?;
    let rows = state
        .repos
        .jobs
        .list_with_authors(search, pagination.limit(), pagination.offset())
        .await?;

    let docs: Vec<JobWithAuthorResponse> =
        rows.into_iter().map(JobWithAuthorResponse::from).collect();
    Ok(Json(Page::new(
        docs,
        total,
        pagination.page(),
        pagination.limit(),
    )))
}

/// GET /jobs/{id} - Get a single posting
///
/// The author is not expanded here; an unknown id yields a 200 with a
/// `null` body (legacy contract).
pub async fn get_job(
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<JobResponse>>> {
    let job = state.repos.jobs.find(id).await?;
    Ok(Json(job.map(JobResponse::from)))
}

/// POST /jobs - Create a posting
pub async fn create_job(
    State(state): State<JobsState>,
    ValidatedJson(request): ValidatedJson<CreateJobRequest>,
) -> Result<Json<&'static str>> {
    let job = Job::new(
        request.name,
        request.job_type,
        request.city,
        request.department,
        request.description,
        request.status.unwrap_or_default(),
        request.author,
    );

    state.repos.jobs.create(&job).await?;

    tracing::info!(job_id = %job.id, "Job posting created");
    Ok(Json(JOB_CREATED))
}

/// PUT /jobs/{id} - Update a posting
///
/// Updating an unknown id is still reported as success (legacy contract:
/// no existence check).
pub async fn update_job(
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateJobRequest>,
) -> Result<Json<&'static str>> {
    let patch = JobPatch {
        name: request.name,
        job_type: request.job_type,
        city: request.city,
        department: request.department,
        description: request.description,
        status: request.status,
        author: request.author,
    };

    state.repos.jobs.update(id, patch).await?;

    Ok(Json(JOB_UPDATED))
}

/// PATCH /jobs/{id}/status - Update only the posting status
pub async fn update_job_status(
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateJobStatusRequest>,
) -> Result<Json<&'static str>> {
    state.repos.jobs.update_status(id, request.status).await?;

    Ok(Json(JOB_STATUS_UPDATED))
}

/// DELETE /jobs/{id} - Delete a posting
///
/// Unconditional: an unknown id still yields the success message.
pub async fn delete_job(
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<&'static str>> {
    state.repos.jobs.delete(id).await?;
    Ok(Json(JOB_DELETED))
}
