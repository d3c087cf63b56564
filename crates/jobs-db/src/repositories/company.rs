//! Queries against the companies table

use tracing::instrument;

use jobs_core::{Company, NewCompany, RepoResult};

use crate::models::CompanyModel;

use super::error::{company_not_found, map_db_error};
use super::PgRepository;

impl PgRepository {
    #[instrument(skip(self))]
    pub(super) async fn select_companies(&self) -> RepoResult<Vec<Company>> {
        let results = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, name, location, created_at, updated_at
            FROM companies
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Company::from).collect())
    }

    #[instrument(skip(self))]
    pub(super) async fn select_company(&self, id: i64) -> RepoResult<Company> {
        let result = sqlx::query_as::<_, CompanyModel>(
            r"
            SELECT id, name, location, created_at, updated_at
            FROM companies
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Company::from).ok_or_else(|| company_not_found(id))
    }

    #[instrument(skip(self))]
    pub(super) async fn insert_company(&self, company: &NewCompany) -> RepoResult<Company> {
        let model = sqlx::query_as::<_, CompanyModel>(
            r"
            INSERT INTO companies (name, location)
            VALUES ($1, $2)
            RETURNING id, name, location, created_at, updated_at
            ",
        )
        .bind(&company.name)
        .bind(&company.location)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Company::from(model))
    }
}
