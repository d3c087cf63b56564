//! Company handlers
//!
//! Endpoints for companies and the jobs posted under them.

use axum::{
    extract::{Path, State},
    Json,
};
use jobs_service::{
    CompanyResponse, CompanyService, CreateCompanyRequest, CreateJobRequest, JobResponse,
    JobService,
};

use crate::extractors::{AuthUser, CompanyIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all companies
///
/// GET /companies
pub async fn list_companies(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<CompanyResponse>>> {
    let service = CompanyService::new(state.service_context());
    let companies = service.list_companies().await?;
    Ok(Json(companies.into_iter().map(CompanyResponse::from).collect()))
}

/// Create a company
///
/// POST /companies
pub async fn create_company(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCompanyRequest>,
) -> ApiResult<Created<Json<CompanyResponse>>> {
    let service = CompanyService::new(state.service_context());
    let company = service.create_company(request).await?;
    Ok(Created(Json(CompanyResponse::from(company))))
}

/// Get company by ID
///
/// GET /companies/{company_id}
pub async fn get_company(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<CompanyIdPath>,
) -> ApiResult<Json<CompanyResponse>> {
    let service = CompanyService::new(state.service_context());
    let company = service.get_company(path.company_id()?).await?;
    Ok(Json(CompanyResponse::from(company)))
}

/// List the jobs posted by a company
///
/// GET /companies/{company_id}/jobs
pub async fn list_company_jobs(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<CompanyIdPath>,
) -> ApiResult<Json<Vec<JobResponse>>> {
    let service = JobService::new(state.service_context());
    let jobs = service.list_jobs_by_company(path.company_id()?).await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// Post a job under a company
///
/// POST /companies/{company_id}/jobs
pub async fn create_company_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<CompanyIdPath>,
    ValidatedJson(request): ValidatedJson<CreateJobRequest>,
) -> ApiResult<Created<Json<JobResponse>>> {
    let company_id = path.company_id()?;
    let service = JobService::new(state.service_context());
    let job = service.create_job(request, company_id).await?;
    Ok(Created(Json(JobResponse::from(job))))
}
