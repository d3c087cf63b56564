//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and coordinates one
//! repository round trip per operation.

pub mod company;
pub mod context;
pub mod error;
pub mod job;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use company::CompanyService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use job::JobService;
pub use user::UserService;
