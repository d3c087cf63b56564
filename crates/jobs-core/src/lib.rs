//! # jobs-core
//!
//! Domain layer containing entities, domain errors, and the ports (repository and
//! password hasher traits) the service layer is written against.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Company, Job, NewCompany, NewJob, NewUser, User};
pub use error::DomainError;
pub use traits::{PasswordHasher, RepoResult, Repository};
