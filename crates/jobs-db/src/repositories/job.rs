//! Queries against the jobs table

use tracing::instrument;

use jobs_core::{Job, NewJob, RepoResult};

use crate::models::JobModel;

use super::error::{company_not_found, job_not_found, map_db_error, map_foreign_key_violation};
use super::PgRepository;

impl PgRepository {
    #[instrument(skip(self))]
    pub(super) async fn select_jobs(&self) -> RepoResult<Vec<Job>> {
        let results = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, role, description, created_at, updated_at
            FROM jobs
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Job::from).collect())
    }

    #[instrument(skip(self))]
    pub(super) async fn select_job(&self, id: i64) -> RepoResult<Job> {
        let result = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, role, description, created_at, updated_at
            FROM jobs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Job::from).ok_or_else(|| job_not_found(id))
    }

    #[instrument(skip(self))]
    pub(super) async fn select_jobs_by_company(&self, company_id: i64) -> RepoResult<Vec<Job>> {
        let results = sqlx::query_as::<_, JobModel>(
            r"
            SELECT id, company_id, role, description, created_at, updated_at
            FROM jobs
            WHERE company_id = $1
            ORDER BY id
            ",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Job::from).collect())
    }

    #[instrument(skip(self))]
    pub(super) async fn insert_job(&self, job: &NewJob) -> RepoResult<Job> {
        let model = sqlx::query_as::<_, JobModel>(
            r"
            INSERT INTO jobs (company_id, role, description)
            VALUES ($1, $2, $3)
            RETURNING id, company_id, role, description, created_at, updated_at
            ",
        )
        .bind(job.company_id)
        .bind(&job.role)
        .bind(&job.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || company_not_found(job.company_id)))?;

        Ok(Job::from(model))
    }
}
