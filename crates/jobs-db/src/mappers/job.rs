//! Job model -> entity mapper

use jobs_core::Job;

use crate::models::JobModel;

/// Convert JobModel to Job entity
impl From<JobModel> for Job {
    fn from(model: JobModel) -> Self {
        Job {
            id: model.id,
            company_id: model.company_id,
            role: model.role,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
