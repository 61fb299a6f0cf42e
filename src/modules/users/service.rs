use tracing::{info, instrument};

use learnhub_core::AppError;
use learnhub_core::messages::{common, user};
use learnhub_models::{RoleName, UpdateTeacherDto, User, UserRecord};

use crate::state::AppState;

pub struct UserService;

impl UserService {
    async fn teacher_role_id(state: &AppState) -> Result<i32, AppError> {
        let role = state
            .roles
            .find_by_name(RoleName::Teacher.as_str())
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .ok_or_else(|| AppError::internal(anyhow::anyhow!(user::NO_TEACHER_ROLE)))?;

        Ok(role.id)
    }

    /// Loads a user and requires the teacher role, 404 otherwise.
    pub async fn find_teacher(state: &AppState, id: i32) -> Result<UserRecord, AppError> {
        let teacher_role = Self::teacher_role_id(state).await?;

        state
            .users
            .find_by_id(id)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .filter(|record| record.role == teacher_role)
            .ok_or_else(|| AppError::not_found(user::NO_TEACHER))
    }

    #[instrument(skip(state))]
    pub async fn list_teachers(state: &AppState) -> Result<Vec<User>, AppError> {
        let teacher_role = Self::teacher_role_id(state).await?;

        let teachers = state
            .users
            .list_by_role(teacher_role)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?;

        Ok(teachers.into_iter().map(User::from).collect())
    }

    #[instrument(skip(state))]
    pub async fn get_teacher(state: &AppState, id: i32) -> Result<User, AppError> {
        Self::find_teacher(state, id).await.map(User::from)
    }

    #[instrument(skip(state))]
    pub async fn update_teacher(state: &AppState, dto: UpdateTeacherDto) -> Result<User, AppError> {
        Self::find_teacher(state, dto.id).await?;

        let updated = state
            .users
            .update(dto.id, dto.changes())
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    return AppError::bad_request(user::UNIQUE_FIELDS);
                }
                AppError::unexpected(user::UNABLE_TO_UPDATE, e)
            })?
            .ok_or_else(|| AppError::not_found(user::NO_TEACHER))?;

        info!(user.id = updated.id, "Teacher updated");
        Ok(User::from(updated))
    }

    #[instrument(skip(state))]
    pub async fn delete_teacher(state: &AppState, id: i32) -> Result<(), AppError> {
        Self::find_teacher(state, id).await?;

        state
            .users
            .delete(id)
            .await
            .map_err(|e| AppError::unexpected(user::UNABLE_TO_REMOVE, e))?;

        info!(user.id = id, "Teacher removed");
        Ok(())
    }
}
