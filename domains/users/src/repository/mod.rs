//! Repository implementations for the Users domain

pub mod users;

use sqlx::PgPool;

pub use users::{UserPatch, UserRepository};

/// Combined repository access for the Users domain
#[derive(Clone)]
pub struct UsersRepositories {
    pub users: UserRepository,
}

impl UsersRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }
}
