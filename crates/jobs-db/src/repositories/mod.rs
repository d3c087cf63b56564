//! Repository implementation
//!
//! PostgreSQL implementation of the `Repository` port defined in jobs-core.
//! Queries are grouped per table; the trait impl below routes to them.

mod company;
mod error;
mod job;
mod user;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use jobs_core::{Company, Job, NewCompany, NewJob, NewUser, RepoResult, Repository, User};

use error::map_db_error;

/// PostgreSQL implementation of Repository
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    /// Create a new PgRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl std::fmt::Debug for PgRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgRepository")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn create_user(&self, user: &NewUser) -> RepoResult<User> {
        self.insert_user(user).await
    }

    async fn find_user_by_email(&self, email: &str) -> RepoResult<User> {
        self.select_user_by_email(email).await
    }

    async fn list_companies(&self) -> RepoResult<Vec<Company>> {
        self.select_companies().await
    }

    async fn find_company_by_id(&self, id: i64) -> RepoResult<Company> {
        self.select_company(id).await
    }

    async fn create_company(&self, company: &NewCompany) -> RepoResult<Company> {
        self.insert_company(company).await
    }

    async fn list_jobs(&self) -> RepoResult<Vec<Job>> {
        self.select_jobs().await
    }

    async fn find_job_by_id(&self, id: i64) -> RepoResult<Job> {
        self.select_job(id).await
    }

    async fn list_jobs_by_company(&self, company_id: i64) -> RepoResult<Vec<Job>> {
        self.select_jobs_by_company(company_id).await
    }

    async fn create_job(&self, job: &NewJob) -> RepoResult<Job> {
        self.insert_job(job).await
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
