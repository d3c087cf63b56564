//! # jobs-service
//!
//! Application layer containing the user, company and job services and the
//! DTOs exchanged with the HTTP layer.

pub mod dto;
pub mod services;

pub use dto::{
    CompanyResponse, CreateCompanyRequest, CreateJobRequest, HealthChecks, HealthResponse,
    JobResponse, LoginRequest, ReadinessResponse, RegisterRequest, TokenResponse, UserResponse,
};
pub use services::{
    CompanyService, JobService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
