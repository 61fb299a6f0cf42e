use tracing::instrument;

use learnhub_core::AppError;
use learnhub_core::messages::role;
use learnhub_models::RoleWithPermissions;

use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_roles(state: &AppState) -> Result<Vec<RoleWithPermissions>, AppError> {
    state
        .roles
        .list_with_permissions()
        .await
        .map_err(|e| AppError::unexpected(role::UNABLE_TO_LIST, e))
}
