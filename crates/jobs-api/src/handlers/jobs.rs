//! Job handlers

use axum::{
    extract::{Path, State},
    Json,
};
use jobs_service::{JobResponse, JobService};

use crate::extractors::{AuthUser, JobIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all jobs
///
/// GET /jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<JobResponse>>> {
    let service = JobService::new(state.service_context());
    let jobs = service.list_jobs().await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// Get job by ID
///
/// GET /jobs/{job_id}
pub async fn get_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<JobIdPath>,
) -> ApiResult<Json<JobResponse>> {
    let service = JobService::new(state.service_context());
    let job = service.get_job(path.job_id()?).await?;
    Ok(Json(JobResponse::from(job)))
}
