//! Company model -> entity mapper

use jobs_core::Company;

use crate::models::CompanyModel;

/// Convert CompanyModel to Company entity
impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            id: model.id,
            name: model.name,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
