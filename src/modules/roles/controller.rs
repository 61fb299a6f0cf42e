use axum::{Json, extract::State};

use learnhub_core::{AppError, ErrorResponse};
use learnhub_models::RoleWithPermissions;

use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

use super::service;

#[utoipa::path(
    get,
    path = "/api/v1/roles",
    responses(
        (status = 200, description = "Roles with their permissions", body = Vec<RoleWithPermissions>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn get_roles(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<RoleWithPermissions>>, AppError> {
    let roles = service::list_roles(&state).await?;
    Ok(Json(roles))
}
