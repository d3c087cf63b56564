//! Job database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for jobs table
#[derive(Debug, Clone, FromRow)]
pub struct JobModel {
    pub id: i64,
    pub company_id: i64,
    pub role: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
