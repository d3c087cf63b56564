//! Password hasher trait (port)

use crate::error::DomainError;

/// One-way credential hashing
///
/// Implementations return [`DomainError::PasswordHash`] when a hash cannot be
/// produced or parsed and [`DomainError::PasswordMismatch`] when verification
/// fails.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<(), DomainError>;
}
