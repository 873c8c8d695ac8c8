//! User management API handlers
//!
//! Implements user CRUD operations:
//! - GET /users - List users with search and pagination
//! - GET /users/{id} - Get a single user
//! - POST /users - Register a user
//! - PUT /users/{id} - Update a user
//! - DELETE /users/{id} - Delete a user

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use talentboard_common::{hash_password, Error, Page, Pagination, Result, ValidatedJson};

use crate::api::state::UsersState;
use crate::domain::entities::{User, UserStatus, UserType};
use crate::repository::UserPatch;

/// Success messages preserved from the legacy API
const USER_CREATED: &str = "Usuário cadastrado com sucesso!";
const USER_UPDATED: &str = "Usuário atualizado com sucesso!";
const USER_DELETED: &str = "Usuário deletado com sucesso!";

/// User response for API operations; the stored password hash is not part
/// of any response shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub picture: Option<String>,
    pub email: String,
    pub status: UserStatus,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub resume: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            picture: user.picture,
            email: user.email,
            status: user.status,
            user_type: user.user_type,
            resume: user.resume,
            created_at: user.created_at,
        }
    }
}

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub search: Option<String>,
}

/// Request for registering a user
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,

    pub picture: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    pub confirm_password: String,

    #[serde(rename = "type")]
    pub user_type: UserType,

    pub status: Option<UserStatus>,

    pub resume: Option<String>,
}

/// Request for updating a user. Independent of the create schema: every
/// field is optional and absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,

    pub picture: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,

    #[serde(rename = "type")]
    pub user_type: Option<UserType>,

    pub status: Option<UserStatus>,

    pub resume: Option<String>,
}

/// GET /users - List users, newest first
///
/// `search` filters by case-insensitive substring match on name.
pub async fn list_users(
    State(state): State<UsersState>,
    Query(params): Query<ListUsersParams>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Page<UserResponse>>> {
    let search = params.search.as_deref();

    let total = state.repos.users.count(search).await?;
    let users = state
        .repos
        .users
        .list(search, pagination.limit(), pagination.offset())
        .await?;

    let docs: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(Page::new(
        docs,
        total,
        pagination.page(),
        pagination.limit(),
    )))
}

/// GET /users/{id} - Get a single user
///
/// An unknown id yields a 200 with a `null` body (legacy contract).
pub async fn get_user(
    State(state): State<UsersState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<UserResponse>>> {
    let user = state.repos.users.find(id).await?;
    Ok(Json(user.map(UserResponse::from)))
}

/// POST /users - Register a user
pub async fn create_user(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<&'static str>> {
    if request.password != request.confirm_password {
        return Err(Error::PasswordMismatch);
    }

    // Check-then-act: rejects sequential duplicate submissions; the unique
    // index on email covers the concurrent window.
    if state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(Error::DuplicateEmail);
    }

    let password = hash_password(&request.password)?;
    let user = User::new(
        request.name,
        request.picture,
        request.email,
        password,
        request.status.unwrap_or_default(),
        request.user_type,
        request.resume,
    );

    state.repos.users.create(&user).await?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(Json(USER_CREATED))
}

/// PUT /users/{id} - Update a user
///
/// A payload email owned by a different record is rejected; a present
/// password is re-hashed before persisting. Updating an unknown id is
/// still reported as success (legacy contract: no existence check).
pub async fn update_user(
    State(state): State<UsersState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<&'static str>> {
    if let Some(email) = &request.email {
        if let Some(existing) = state.repos.users.find_by_email(email).await? {
            if existing.id != id {
                return Err(Error::DuplicateEmail);
            }
        }
    }

    let password = match &request.password {
        Some(plain) => Some(hash_password(plain)?),
        None => None,
    };

    let patch = UserPatch {
        name: request.name,
        picture: request.picture,
        email: request.email,
        password,
        status: request.status,
        user_type: request.user_type,
        resume: request.resume,
    };

    state.repos.users.update(id, patch).await?;

    Ok(Json(USER_UPDATED))
}

/// DELETE /users/{id} - Delete a user
///
/// Unconditional: an unknown id still yields the success message.
pub async fn delete_user(
    State(state): State<UsersState>,
    Path(id): Path<Uuid>,
) -> Result<Json<&'static str>> {
    state.repos.users.delete(id).await?;
    Ok(Json(USER_DELETED))
}
