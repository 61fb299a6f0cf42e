use axum::{Json, extract::State};
use tracing::instrument;

use learnhub_core::messages::common;
use learnhub_core::{AppError, ErrorResponse, ValidationErrorResponse};
use learnhub_models::{IdParams, ResultResponse, UpdateTeacherDto, User};

use crate::middleware::auth::{AuthUser, RequireAdmin};
use crate::state::AppState;
use crate::validator::{NumericPath, ValidatedJson};

use super::service::UserService;

#[utoipa::path(
    get,
    path = "/api/v1/teachers",
    responses(
        (status = 200, description = "All teachers", body = Vec<User>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn get_teachers(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    let teachers = UserService::list_teachers(&state).await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers/{id}",
    params(IdParams),
    responses(
        (status = 200, description = "Teacher", body = User),
        (status = 400, description = "Non-numeric id", body = ValidationErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn get_teacher(
    State(state): State<AppState>,
    _user: AuthUser,
    NumericPath(params): NumericPath<IdParams>,
) -> Result<Json<User>, AppError> {
    let teacher = UserService::get_teacher(&state, params.id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/v1/teacher",
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = User),
        (status = 400, description = "Validation error or duplicate login/email", body = ValidationErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn update_teacher(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<User>, AppError> {
    let teacher = UserService::update_teacher(&state, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/v1/teachers/{id}",
    params(IdParams),
    responses(
        (status = 200, description = "Teacher removed", body = ResultResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    NumericPath(params): NumericPath<IdParams>,
) -> Result<Json<ResultResponse>, AppError> {
    UserService::delete_teacher(&state, params.id).await?;
    Ok(Json(ResultResponse::new(common::REMOVE_SUCCESS)))
}
