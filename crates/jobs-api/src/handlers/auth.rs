//! Authentication handlers
//!
//! Endpoints for user signup and login.

use axum::{extract::State, Json};
use jobs_common::TOKEN_LIFETIME_SECS;
use jobs_service::{LoginRequest, RegisterRequest, TokenResponse, UserResponse, UserService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request).await?;
    Ok(Created(Json(UserResponse::from(user))))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = UserService::new(state.service_context());
    let claims = service.login(request).await?;
    let token = state.jwt_service().sign(&claims)?;
    Ok(Json(TokenResponse::bearer(token, TOKEN_LIFETIME_SECS)))
}
