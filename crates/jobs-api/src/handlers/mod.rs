//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod companies;
pub mod health;
pub mod jobs;
