use axum::{Json, extract::State};
use tracing::instrument;

use learnhub_core::messages::common;
use learnhub_core::{AppError, ErrorResponse, ValidationErrorResponse};
use learnhub_models::{
    Category, CategoryListItem, CreateCategoryDto, IdParams, ResultResponse, UpdateCategoryDto,
};

use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;
use crate::validator::{NumericPath, ValidatedJson};

use super::service::CategoryService;

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryListItem>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryListItem>>, AppError> {
    let categories = CategoryService::list(&state).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(IdParams),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 400, description = "Non-numeric id", body = ValidationErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    NumericPath(params): NumericPath<IdParams>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::get(&state, params.id).await?;
    Ok(Json(category))
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 200, description = "Category created", body = Category),
        (status = 400, description = "Validation error or duplicate title", body = ValidationErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    tag = "Categories",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn create_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateCategoryDto>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::create(&state, dto).await?;
    Ok(Json(category))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories",
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Validation error or duplicate title", body = ValidationErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Categories",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn update_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<UpdateCategoryDto>,
) -> Result<Json<Category>, AppError> {
    let category = CategoryService::update(&state, dto).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(IdParams),
    responses(
        (status = 200, description = "Removed, or nothing to remove", body = ResultResponse),
        (status = 400, description = "Non-numeric id", body = ValidationErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    tag = "Categories",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_category(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    NumericPath(params): NumericPath<IdParams>,
) -> Result<Json<ResultResponse>, AppError> {
    CategoryService::delete(&state, params.id).await?;
    Ok(Json(ResultResponse::new(common::REMOVE_SUCCESS)))
}
