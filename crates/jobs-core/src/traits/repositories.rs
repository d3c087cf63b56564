//! Repository trait (port) - defines the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Company, Job, NewCompany, NewJob, NewUser, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Data access for users, companies and jobs
///
/// Single-record lookups report absence as the matching not-found
/// [`DomainError`] rather than `Ok(None)`.
#[async_trait]
pub trait Repository: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Persist a new user and return the stored record
    async fn create_user(&self, user: &NewUser) -> RepoResult<User>;

    /// Find a user (including the password hash) by email
    async fn find_user_by_email(&self, email: &str) -> RepoResult<User>;

    // ========================================================================
    // Companies
    // ========================================================================

    /// List all companies ordered by id
    async fn list_companies(&self) -> RepoResult<Vec<Company>>;

    /// Find company by ID
    async fn find_company_by_id(&self, id: i64) -> RepoResult<Company>;

    /// Persist a new company and return the stored record
    async fn create_company(&self, company: &NewCompany) -> RepoResult<Company>;

    // ========================================================================
    // Jobs
    // ========================================================================

    /// List all jobs ordered by id
    async fn list_jobs(&self) -> RepoResult<Vec<Job>>;

    /// Find job by ID
    async fn find_job_by_id(&self, id: i64) -> RepoResult<Job>;

    /// List the jobs posted by a company, ordered by id
    async fn list_jobs_by_company(&self, company_id: i64) -> RepoResult<Vec<Job>>;

    /// Persist a new job and return the stored record
    async fn create_job(&self, job: &NewJob) -> RepoResult<Job>;

    // ========================================================================
    // Health
    // ========================================================================

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
