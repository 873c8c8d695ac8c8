//! Shared utilities, configuration, and error handling for Talentboard
//!
//! This crate provides common functionality used across the Talentboard
//! application:
//! - Configuration management following 12-factor principles
//! - Error types and the HTTP boundary adapter
//! - Axum extractors (validated JSON, pagination)
//! - Password hashing

pub mod config;
pub mod error;
pub mod extractors;
pub mod pagination;
pub mod password;

pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
pub use pagination::Page;
pub use password::hash_password;
