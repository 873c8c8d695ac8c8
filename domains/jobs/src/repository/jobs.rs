//! Job repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use talentboard_common::Result;
use uuid::Uuid;

use crate::domain::entities::{Job, JobStatus, JobType};

/// Partial update for a job row. `None` fields keep their stored values.
#[derive(Debug, Default)]
pub struct JobPatch {
    pub name: Option<String>,
    pub job_type: Option<JobType>,
    pub city: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
    pub author: Option<Uuid>,
}

/// Read model for listings: a posting joined with its author row. The
/// author columns come from the users domain and are carried as plain
/// text; `None` author fields mean the reference is dangling.
#[derive(Debug, sqlx::FromRow)]
pub struct JobWithAuthorRow {
    pub id: Uuid,
    pub name: String,
    pub job_type: JobType,
    pub city: String,
    pub department: String,
    pub description: String,
    pub status: JobStatus,
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub author_id: Option<Uuid>,
    pub author_name: Option<String>,
    pub author_picture: Option<String>,
    pub author_email: Option<String>,
    pub author_status: Option<String>,
    pub author_type: Option<String>,
    pub author_resume: Option<String>,
    pub author_created_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find job by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, name, job_type, city, department, description, status, author, created_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(job)
    }

    /// List postings with their authors, newest first, optionally filtered
    /// by a case-insensitive substring match on name.
    pub async fn list_with_authors(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobWithAuthorRow>> {
        let rows = if let Some(search) = search {
            sqlx::query_as::<_, JobWithAuthorRow>(
                r#"
                SELECT j.id, j.name, j.job_type, j.city, j.department, j.description,
                       j.status, j.author, j.created_at,
                       u.id AS author_id, u.name AS author_name, u.picture AS author_picture,
                       u.email AS author_email, u.status::text AS author_status,
                       u.user_type::text AS author_type, u.resume AS author_resume,
                       u.created_at AS author_created_at
                FROM jobs j
                LEFT JOIN users u ON u.id = j.author
                WHERE j.name ILIKE '%' || $1 || '%'
                ORDER BY j.created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, JobWithAuthorRow>(
                r#"
                SELECT j.id, j.name, j.job_type, j.city, j.department, j.description,
                       j.status, j.author, j.created_at,
                       u.id AS author_id, u.name AS author_name, u.picture AS author_picture,
                       u.email AS author_email, u.status::text AS author_status,
                       u.user_type::text AS author_type, u.resume AS author_resume,
                       u.created_at AS author_created_at
                FROM jobs j
                LEFT JOIN users u ON u.id = j.author
                ORDER BY j.created_at DESC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(rows)
    }

    /// Count postings matching the same filter as
    /// [`list_with_authors`](Self::list_with_authors)
    pub async fn count(&self, search: Option<&str>) -> Result<i64> {
        let count: (i64,) = if let Some(search) = search {
            sqlx::query_as("SELECT COUNT(*) FROM jobs WHERE name ILIKE '%' || $1 || '%'")
                .bind(search)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_as("SELECT COUNT(*) FROM jobs")
                .fetch_one(&self.pool)
                .await?
        };

        Ok(count.0)
    }

    /// Insert a new posting
    pub async fn create(&self, job: &Job) -> Result<Job> {
        let created = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (id, name, job_type, city, department, description, status, author, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, job_type, city, department, description, status, author, created_at
            "#,
        )
        .bind(job.id)
        .bind(&job.name)
        .bind(job.job_type)
        .bind(&job.city)
        .bind(&job.department)
        .bind(&job.description)
        .bind(job.status)
        .bind(job.author)
        .bind(job.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a partial update. Absent fields keep their stored values.
    /// Returns the updated row, or `None` when the id does not exist.
    pub async fn update(&self, id: Uuid, patch: JobPatch) -> Result<Option<Job>> {
        let updated = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs SET
                name = COALESCE($2, name),
                job_type = COALESCE($3, job_type),
                city = COALESCE($4, city),
                department = COALESCE($5, department),
                description = COALESCE($6, description),
                status = COALESCE($7, status),
                author = COALESCE($8, author)
            WHERE id = $1
            RETURNING id, name, job_type, city, department, description, status, author, created_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.job_type)
        .bind(patch.city)
        .bind(patch.department)
        .bind(patch.description)
        .bind(patch.status)
        .bind(patch.author)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Set only the posting status
    pub async fn update_status(&self, id: Uuid, status: JobStatus) -> Result<()> {
        sqlx::query("UPDATE jobs SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove a posting by id. Deleting a missing id is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
