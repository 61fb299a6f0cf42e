//! Course materials. Access depends on the caller's relation to the course:
//! admins and the course teacher may read and write, enrolled students may
//! only read.

use tracing::{info, instrument};

use learnhub_core::AppError;
use learnhub_core::messages::{common, course, material};
use learnhub_models::{Course, CreateMaterialDto, Material, RoleName, UpdateMaterialDto};

use crate::middleware::auth::AuthUser;
use crate::modules::courses::service::CourseService;
use crate::state::AppState;

pub struct MaterialService;

impl MaterialService {
    fn is_course_teacher(user: &AuthUser, course: &Course) -> bool {
        user.has_role(RoleName::Teacher) && user.0.user_id() == Some(course.teacher_id)
    }

    async fn readable_course(
        state: &AppState,
        user: &AuthUser,
        course_id: i32,
    ) -> Result<Course, AppError> {
        let found = CourseService::get(state, course_id).await?;

        if user.is_admin() || Self::is_course_teacher(user, &found) {
            return Ok(found);
        }

        if user.has_role(RoleName::Student) {
            let enrolled = state
                .courses
                .is_enrolled(course_id, user.user_id()?)
                .await
                .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?;

            if enrolled {
                return Ok(found);
            }
        }

        Err(AppError::forbidden(course::NO_ACCESS))
    }

    async fn managed_course(
        state: &AppState,
        user: &AuthUser,
        course_id: i32,
    ) -> Result<Course, AppError> {
        let found = CourseService::get(state, course_id).await?;

        if user.is_admin() || Self::is_course_teacher(user, &found) {
            return Ok(found);
        }

        Err(AppError::forbidden(material::NOT_COURSE_TEACHER))
    }

    #[instrument(skip(state, user), fields(user.name = %user.username()))]
    pub async fn list(
        state: &AppState,
        user: &AuthUser,
        course_id: i32,
    ) -> Result<Vec<Material>, AppError> {
        Self::readable_course(state, user, course_id).await?;

        state
            .materials
            .list_by_course(course_id)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))
    }

    #[instrument(skip(state, user), fields(user.name = %user.username()))]
    pub async fn get(
        state: &AppState,
        user: &AuthUser,
        course_id: i32,
        material_id: i32,
    ) -> Result<Material, AppError> {
        Self::readable_course(state, user, course_id).await?;

        state
            .materials
            .find(course_id, material_id)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .ok_or_else(|| AppError::not_found(material::NO_MATERIAL))
    }

    #[instrument(skip(state, user, dto), fields(user.name = %user.username()))]
    pub async fn create(
        state: &AppState,
        user: &AuthUser,
        course_id: i32,
        dto: CreateMaterialDto,
    ) -> Result<Material, AppError> {
        Self::managed_course(state, user, course_id).await?;

        let created = state
            .materials
            .create(dto.into_new(course_id))
            .await
            .map_err(|e| AppError::unexpected(material::UNABLE_CREATE_MATERIAL, e))?;

        info!(course.id = course_id, material.id = created.id, "Material created");
        Ok(created)
    }

    #[instrument(skip(state, user, dto), fields(user.name = %user.username()))]
    pub async fn update(
        state: &AppState,
        user: &AuthUser,
        course_id: i32,
        dto: UpdateMaterialDto,
    ) -> Result<Material, AppError> {
        Self::managed_course(state, user, course_id).await?;

        state
            .materials
            .update(course_id, dto.id, dto.changes())
            .await
            .map_err(|e| AppError::unexpected(material::UNABLE_CHANGE_MATERIAL, e))?
            .ok_or_else(|| AppError::not_found(material::NO_MATERIAL))
    }

    #[instrument(skip(state, user), fields(user.name = %user.username()))]
    pub async fn delete(
        state: &AppState,
        user: &AuthUser,
        course_id: i32,
        material_id: i32,
    ) -> Result<(), AppError> {
        Self::managed_course(state, user, course_id).await?;

        let removed = state
            .materials
            .delete(course_id, material_id)
            .await
            .map_err(|e| AppError::unexpected(material::UNABLE_REMOVE_MATERIAL, e))?;

        info!(course.id = course_id, material.id = material_id, removed, "Material delete processed");
        Ok(())
    }
}
