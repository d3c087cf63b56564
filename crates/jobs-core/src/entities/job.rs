//! Job entity - an opening posted by a company

use chrono::{DateTime, Utc};

/// Job posting
///
/// Every job belongs to exactly one company; the repository enforces that the
/// referenced company exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: i64,
    pub company_id: i64,
    pub role: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new Job
    pub fn new(id: i64, company_id: i64, role: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            company_id,
            role,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the job is posted by the given company
    #[inline]
    pub fn belongs_to(&self, company_id: i64) -> bool {
        self.company_id == company_id
    }
}

/// Values needed to insert a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub company_id: i64,
    pub role: String,
    pub description: String,
}
