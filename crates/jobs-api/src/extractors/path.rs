//! Path parameter extractors
//!
//! Ids arrive as strings and are parsed here so a malformed id becomes an
//! `INVALID_PATH_PARAMETER` error body instead of a plain-text rejection.

use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with company_id
#[derive(Debug, Deserialize)]
pub struct CompanyIdPath {
    pub company_id: String,
}

impl CompanyIdPath {
    /// Parse company_id as a numeric id
    pub fn company_id(&self) -> Result<i64, ApiError> {
        parse_id(&self.company_id, "company_id")
    }
}

/// Path parameters with job_id
#[derive(Debug, Deserialize)]
pub struct JobIdPath {
    pub job_id: String,
}

impl JobIdPath {
    /// Parse job_id as a numeric id
    pub fn job_id(&self) -> Result<i64, ApiError> {
        parse_id(&self.job_id, "job_id")
    }
}

fn parse_id(raw: &str, name: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}
