use axum::{Json, extract::State};
use tracing::instrument;

use learnhub_core::messages::auth;
use learnhub_core::{AppError, ErrorResponse, ValidationErrorResponse};
use learnhub_models::{AccessTokenResponse, ResultResponse, SigninRequest, SignupRequest, User};

use crate::middleware::api_key::ApiKey;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AuthService;

/// Register a student or teacher account
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Validation error, wrong role or duplicate credentials", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<Json<User>, AppError> {
    let user = AuthService::signup(&state, dto).await?;
    Ok(Json(user))
}

/// Sign in with login or email and receive an access token
#[utoipa::path(
    post,
    path = "/api/v1/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Access token", body = AccessTokenResponse),
        (status = 400, description = "Wrong credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SigninRequest>,
) -> Result<Json<AccessTokenResponse>, AppError> {
    let token = AuthService::signin(&state, dto).await?;
    Ok(Json(token))
}

/// Check an API key
#[utoipa::path(
    get,
    path = "/api/v1/auth/api-key",
    responses(
        (status = 200, description = "Key accepted", body = ResultResponse),
        (status = 401, description = "Missing or wrong key", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("api_key" = []))
)]
pub async fn check_api_key(_key: ApiKey) -> Json<ResultResponse> {
    Json(ResultResponse::new(auth::AUTH_PASSED))
}

/// Check a bearer token
#[utoipa::path(
    get,
    path = "/api/v1/auth/jwt",
    responses(
        (status = 200, description = "Token accepted", body = ResultResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn check_jwt(_user: AuthUser) -> Json<ResultResponse> {
    Json(ResultResponse::new(auth::AUTH_PASSED))
}
