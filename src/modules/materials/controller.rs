use axum::{Json, extract::State};
use tracing::instrument;

use learnhub_core::messages::common;
use learnhub_core::{AppError, ErrorResponse, ValidationErrorResponse};
use learnhub_models::{
    CourseParams, CreateMaterialDto, Material, MaterialParams, ResultResponse, UpdateMaterialDto,
};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{NumericPath, ValidatedJson};

use super::service::MaterialService;

#[utoipa::path(
    get,
    path = "/api/v1/courses/{courseId}/materials",
    params(CourseParams),
    responses(
        (status = 200, description = "Materials of the course", body = Vec<Material>),
        (status = 403, description = "No access to the course", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Materials",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user))]
pub async fn get_materials(
    State(state): State<AppState>,
    user: AuthUser,
    NumericPath(params): NumericPath<CourseParams>,
) -> Result<Json<Vec<Material>>, AppError> {
    let materials = MaterialService::list(&state, &user, params.course_id).await?;
    Ok(Json(materials))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{courseId}/materials/{materialId}",
    params(MaterialParams),
    responses(
        (status = 200, description = "Material", body = Material),
        (status = 400, description = "Non-numeric path parameter", body = ValidationErrorResponse),
        (status = 403, description = "No access to the course", body = ErrorResponse),
        (status = 404, description = "Course or material not found", body = ErrorResponse)
    ),
    tag = "Materials",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user))]
pub async fn get_material(
    State(state): State<AppState>,
    user: AuthUser,
    NumericPath(params): NumericPath<MaterialParams>,
) -> Result<Json<Material>, AppError> {
    let material =
        MaterialService::get(&state, &user, params.course_id, params.material_id).await?;
    Ok(Json(material))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/{courseId}/materials",
    params(CourseParams),
    request_body = CreateMaterialDto,
    responses(
        (status = 200, description = "Material created", body = Material),
        (status = 400, description = "Validation error", body = ValidationErrorResponse),
        (status = 403, description = "Not the course teacher", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Materials",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user))]
pub async fn create_material(
    State(state): State<AppState>,
    user: AuthUser,
    NumericPath(params): NumericPath<CourseParams>,
    ValidatedJson(dto): ValidatedJson<CreateMaterialDto>,
) -> Result<Json<Material>, AppError> {
    let material = MaterialService::create(&state, &user, params.course_id, dto).await?;
    Ok(Json(material))
}

#[utoipa::path(
    put,
    path = "/api/v1/courses/{courseId}/materials",
    params(CourseParams),
    request_body = UpdateMaterialDto,
    responses(
        (status = 200, description = "Material updated", body = Material),
        (status = 400, description = "Validation error", body = ValidationErrorResponse),
        (status = 403, description = "Not the course teacher", body = ErrorResponse),
        (status = 404, description = "Course or material not found", body = ErrorResponse)
    ),
    tag = "Materials",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user))]
pub async fn update_material(
    State(state): State<AppState>,
    user: AuthUser,
    NumericPath(params): NumericPath<CourseParams>,
    ValidatedJson(dto): ValidatedJson<UpdateMaterialDto>,
) -> Result<Json<Material>, AppError> {
    let material = MaterialService::update(&state, &user, params.course_id, dto).await?;
    Ok(Json(material))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{courseId}/materials/{materialId}",
    params(MaterialParams),
    responses(
        (status = 200, description = "Removed, or nothing to remove", body = ResultResponse),
        (status = 403, description = "Not the course teacher", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Materials",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user))]
pub async fn delete_material(
    State(state): State<AppState>,
    user: AuthUser,
    NumericPath(params): NumericPath<MaterialParams>,
) -> Result<Json<ResultResponse>, AppError> {
    MaterialService::delete(&state, &user, params.course_id, params.material_id).await?;
    Ok(Json(ResultResponse::new(common::REMOVE_SUCCESS)))
}
