//! User service
//!
//! Handles signup and password login.

use jobs_common::Claims;
use jobs_core::{NewUser, User};
use tracing::{info, instrument};

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// The password is hashed before anything reaches the repository; a hashing
    /// failure makes no repository call.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_user(&self, request: RegisterRequest) -> ServiceResult<User> {
        let password_hash = self
            .ctx
            .hasher()
            .hash(&request.password)
            .map_err(|e| ServiceError::Hashing(e.to_string()))?;

        let new_user = NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        };

        let user = self.ctx.repository().create_user(&new_user).await?;

        info!(user_id = user.id, "User registered successfully");
        Ok(user)
    }

    /// Check credentials and build the session claims
    ///
    /// Lookup failures, an unknown email included, are returned as the
    /// repository reported them.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<Claims> {
        let user = self
            .ctx
            .repository()
            .find_user_by_email(&request.email)
            .await?;

        if let Err(e) = self
            .ctx
            .hasher()
            .verify(&request.password, &user.password_hash)
        {
            info!(user_id = user.id, error = %e, "Login rejected");
            return Err(ServiceError::Authentication);
        }

        let claims = Claims::issue(user.id);

        info!(user_id = user.id, "User logged in");
        Ok(claims)
    }
}
