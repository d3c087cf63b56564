//! Ports implemented by the infrastructure crates

mod hasher;
mod repositories;

pub use hasher::PasswordHasher;
pub use repositories::{RepoResult, Repository};
