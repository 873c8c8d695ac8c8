//! Jobs domain state

use crate::JobsRepositories;

/// Application state for the Jobs domain; repositories are injected here
/// so tests can point the handlers at any database.
#[derive(Clone)]
pub struct JobsState {
    pub repos: JobsRepositories,
}
