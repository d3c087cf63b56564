//! Service context - dependency container for services
//!
//! Holds the repository and password hasher the services are written against.

use std::sync::Arc;

use jobs_core::{PasswordHasher, Repository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    repository: Arc<dyn Repository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(repository: Arc<dyn Repository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Start building a service context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the repository
    pub fn repository(&self) -> &dyn Repository {
        self.repository.as_ref()
    }

    /// Get the password hasher
    pub fn hasher(&self) -> &dyn PasswordHasher {
        self.hasher.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repository", &"dyn Repository")
            .field("hasher", &"dyn PasswordHasher")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    repository: Option<Arc<dyn Repository>>,
    hasher: Option<Arc<dyn PasswordHasher>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(mut self, repository: Arc<dyn Repository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.repository
                .ok_or_else(|| ServiceError::validation("repository is required"))?,
            self.hasher
                .ok_or_else(|| ServiceError::validation("hasher is required"))?,
        ))
    }
}
