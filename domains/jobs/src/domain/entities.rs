//! Job domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Posting status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Inactive,
}

/// Contract type offered by the posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type", rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum JobType {
    Intern,
    FullTime,
}

/// Job posting entity. `author` references a user; the reference is not
/// constrained, so listings must tolerate a missing author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub name: String,
    pub job_type: JobType,
    pub city: String,
    pub department: String,
    pub description: String,
    pub status: JobStatus,
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Assemble a new posting record
    pub fn new(
        name: String,
        job_type: JobType,
        city: String,
        department: String,
        description: String,
        status: JobStatus,
        author: Uuid,
    ) -> Self {
        Job {
            id: Uuid::new_v4(),
            name,
            job_type,
            city,
            department,
            description,
            status,
            author,
            created_at: Utc::now(),
        }
    }
}
