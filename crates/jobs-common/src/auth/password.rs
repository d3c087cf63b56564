//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};
use jobs_core::{DomainError, PasswordHasher};

/// Hash a password using Argon2id
///
/// # Errors
/// Returns `DomainError::PasswordHash` if hashing fails
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::PasswordHash(e.to_string()))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns `DomainError::PasswordHash` if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, DomainError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| DomainError::PasswordHash(format!("invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Argon2id implementation of the domain [`PasswordHasher`] port
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new hasher
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        hash_password(password)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<(), DomainError> {
        if verify_password(password, hash)? {
            Ok(())
        } else {
            Err(DomainError::PasswordMismatch)
        }
    }
}
