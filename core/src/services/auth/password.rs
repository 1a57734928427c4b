//! Password hashing and verification.
//!
//! bcrypt with the platform's historical cost factor of 10. The salt is
//! embedded in the hash; verification is bcrypt's constant-time-equivalent
//! compare.

use crate::errors::{DomainError, DomainResult};

/// bcrypt cost factor
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password
pub fn hash(plaintext: &str) -> DomainResult<String> {
    bcrypt::hash(plaintext, HASH_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Check a plaintext password against a stored hash
pub fn verify(plaintext: &str, stored_hash: &str) -> DomainResult<bool> {
    bcrypt::verify(plaintext, stored_hash).map_err(|e| DomainError::Internal {
        message: format!("Password verification failed: {}", e),
    })
}
