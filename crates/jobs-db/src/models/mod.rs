//! Database models - SQLx-compatible structs for PostgreSQL tables

mod company;
mod job;
mod user;

pub use company::CompanyModel;
pub use job::JobModel;
pub use user::UserModel;
