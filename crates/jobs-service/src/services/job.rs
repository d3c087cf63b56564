//! Job service

use jobs_core::{Job, NewJob};
use tracing::{info, instrument};

use crate::dto::CreateJobRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Job service
pub struct JobService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> JobService<'a> {
    /// Create a new JobService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every job, ordered by id
    #[instrument(skip(self))]
    pub async fn list_jobs(&self) -> ServiceResult<Vec<Job>> {
        Ok(self.ctx.repository().list_jobs().await?)
    }

    /// Get a job by id
    #[instrument(skip(self))]
    pub async fn get_job(&self, job_id: i64) -> ServiceResult<Job> {
        Ok(self.ctx.repository().find_job_by_id(job_id).await?)
    }

    /// List the jobs posted by a company; an unknown company yields no jobs
    #[instrument(skip(self))]
    pub async fn list_jobs_by_company(&self, company_id: i64) -> ServiceResult<Vec<Job>> {
        Ok(self.ctx.repository().list_jobs_by_company(company_id).await?)
    }

    /// Post a job under a company
    #[instrument(skip(self, request))]
    pub async fn create_job(
        &self,
        request: CreateJobRequest,
        company_id: i64,
    ) -> ServiceResult<Job> {
        let new_job = NewJob {
            company_id,
            role: request.role,
            description: request.description,
        };

        let job = self.ctx.repository().create_job(&new_job).await?;

        info!(job_id = job.id, company_id, "Job created");
        Ok(job)
    }
}
