//! User domain entities
//!
//! A user is a candidate, a headhunter or an admin. Candidates carry a
//! resume reference; the other variants leave it empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "user_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

/// User role within the job board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Headhunter,
    Candidate,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub picture: Option<String>,
    pub email: String,
    /// bcrypt hash, never exposed through the API
    #[serde(skip_serializing)]
    pub password: String,
    pub status: UserStatus,
    pub user_type: UserType,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a new user record. `password` must already be hashed.
    pub fn new(
        name: String,
        picture: Option<String>,
        email: String,
        password: String,
        status: UserStatus,
        user_type: UserType,
        resume: Option<String>,
    ) -> Self {
        User {
            id: Uuid::new_v4(),
            name,
            picture,
            email,
            password,
            status,
            user_type,
            resume,
            created_at: Utc::now(),
        }
    }
}
