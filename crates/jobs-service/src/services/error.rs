//! Service layer error types
//!
//! Collaborator failures are either passed through unchanged (repository) or
//! wrapped with a fixed message (hashing, login mismatch).

use jobs_common::domain_status;
use jobs_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Password hash generation failed
    #[error("could not hash password: {0}")]
    Hashing(String),

    /// Data access failure, including not-found lookups
    #[error(transparent)]
    Repository(#[from] DomainError),

    /// Password did not match the stored hash
    #[error("entered password is wrong")]
    Authentication,

    /// Missing dependency while wiring the service context
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Hashing(_) => 500,
            Self::Repository(e) => domain_status(e),
            Self::Authentication => 401,
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Hashing(_) => "PASSWORD_HASH_FAILED",
            Self::Repository(e) => e.code(),
            Self::Authentication => "INVALID_CREDENTIALS",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
