//! Users domain state

use crate::UsersRepositories;

/// Application state for the Users domain; repositories are injected here
/// so tests can point the handlers at any database.
#[derive(Clone)]
pub struct UsersState {
    pub repos: UsersRepositories,
}
