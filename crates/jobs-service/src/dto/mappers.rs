//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use jobs_core::{Company, Job, User};

use super::responses::{CompanyResponse, JobResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            location: company.location,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            role: job.role,
            description: job.description,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
