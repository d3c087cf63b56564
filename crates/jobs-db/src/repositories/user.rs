//! Queries against the users table

use tracing::instrument;

use jobs_core::{DomainError, NewUser, RepoResult, User};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};
use super::PgRepository;

impl PgRepository {
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub(super) async fn insert_user(&self, user: &NewUser) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    pub(super) async fn select_user_by_email(&self, email: &str) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::from).ok_or_else(|| user_not_found(email))
    }
}
