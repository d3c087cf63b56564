//! Company entity

use chrono::{DateTime, Utc};

/// Company that can post jobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Create a new Company
    pub fn new(id: i64, name: String, location: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            location,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Values needed to insert a company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub location: String,
}
