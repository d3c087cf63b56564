//! Company service

use jobs_core::{Company, NewCompany};
use tracing::{info, instrument};

use crate::dto::CreateCompanyRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Company service
pub struct CompanyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CompanyService<'a> {
    /// Create a new CompanyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every company, ordered by id
    #[instrument(skip(self))]
    pub async fn list_companies(&self) -> ServiceResult<Vec<Company>> {
        Ok(self.ctx.repository().list_companies().await?)
    }

    /// Get a company by id
    #[instrument(skip(self))]
    pub async fn get_company(&self, company_id: i64) -> ServiceResult<Company> {
        Ok(self.ctx.repository().find_company_by_id(company_id).await?)
    }

    /// Create a company
    #[instrument(skip(self))]
    pub async fn create_company(&self, request: CreateCompanyRequest) -> ServiceResult<Company> {
        let new_company = NewCompany {
            name: request.name,
            location: request.location,
        };

        let company = self.ctx.repository().create_company(&new_company).await?;

        info!(company_id = company.id, "Company created");
        Ok(company)
    }
}
