//! Password hashing
//!
//! bcrypt with a per-hash random salt. Hashes are stored as the full
//! bcrypt string (algorithm, cost and salt embedded) and are never
//! serialized in API responses.

use crate::{Error, Result};

/// bcrypt cost factor
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String> {
    bcrypt::hash(plain, HASH_COST)
        .map_err(|e| Error::Unexpected(anyhow::anyhow!("Password hashing failed: {}", e)))
}
