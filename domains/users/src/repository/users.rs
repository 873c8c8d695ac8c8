//! User repository

use crate::domain::entities::{User, UserStatus, UserType};
use talentboard_common::{Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// Partial update for a user row. `None` fields keep their stored values
/// (last-write-wins, no read-modify-write cycle).
#[derive(Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub picture: Option<String>,
    pub email: Option<String>,
    /// Already-hashed password
    pub password: Option<String>,
    pub status: Option<UserStatus>,
    pub user_type: Option<UserType>,
    pub resume: Option<String>,
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, picture, email, password, status, user_type, resume, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, picture, email, password, status, user_type, resume, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List users, newest first, optionally filtered by a case-insensitive
    /// substring match on name.
    pub async fn list(&self, search: Option<&str>, limit: i64, offset: i64) -> Result<Vec<User>> {
        let users = if let Some(search) = search {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, picture, email, password, status, user_type, resume, created_at
                FROM users
                WHERE name ILIKE '%' || $1 || '%'
                ORDER BY created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, picture, email, password, status, user_type, resume, created_at
                FROM users
                ORDER BY created_at DESC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(users)
    }

    /// Count users matching the same filter as [`list`](Self::list)
    pub async fn count(&self, search: Option<&str>) -> Result<i64> {
        let count: (i64,) = if let Some(search) = search {
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE name ILIKE '%' || $1 || '%'")
                .bind(search)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_as("SELECT COUNT(*) FROM users")
                .fetch_one(&self.pool)
                .await?
        };

        Ok(count.0)
    }

    /// Insert a new user. A unique-index violation on email is translated
    /// to the duplicate-email error, covering the window the handler's
    /// pre-check cannot.
    pub async fn create(&self, user: &User) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, picture, email, password, status, user_type, resume, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, picture, email, password, status, user_type, resume, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.picture)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.status)
        .bind(user.user_type)
        .bind(&user.resume)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(created)
    }

    /// Apply a partial update. Absent fields keep their stored values.
    /// Returns the updated row, or `None` when the id does not exist.
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                picture = COALESCE($3, picture),
                email = COALESCE($4, email),
                password = COALESCE($5, password),
                status = COALESCE($6, status),
                user_type = COALESCE($7, user_type),
                resume = COALESCE($8, resume)
            WHERE id = $1
            RETURNING id, name, picture, email, password, status, user_type, resume, created_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.picture)
        .bind(patch.email)
        .bind(patch.password)
        .bind(patch.status)
        .bind(patch.user_type)
        .bind(patch.resume)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(updated)
    }

    /// Remove a user by id. Deleting a missing id is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_unique_violation(e: sqlx::Error) -> Error {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return Error::DuplicateEmail;
        }
    }
    Error::Database(e)
}
