use tracing::{info, instrument};

use learnhub_core::AppError;
use learnhub_core::messages::{category, common, course};
use learnhub_models::{Course, CreateCourseDto, NewCourse, UpdateCourseDto};

use crate::modules::users::service::UserService;
use crate::state::AppState;

pub struct CourseService;

impl CourseService {
    async fn ensure_category(state: &AppState, category_id: i32) -> Result<(), AppError> {
        state
            .categories
            .find_by_id(category_id)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .ok_or_else(|| AppError::not_found(category::NO_CATEGORY))?;

        Ok(())
    }

    #[instrument(skip(state))]
    pub async fn list(state: &AppState) -> Result<Vec<Course>, AppError> {
        state
            .courses
            .list()
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))
    }

    #[instrument(skip(state))]
    pub async fn get(state: &AppState, id: i32) -> Result<Course, AppError> {
        state
            .courses
            .find_by_id(id)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .ok_or_else(|| AppError::not_found(course::NO_COURSE))
    }

    #[instrument(skip(state))]
    pub async fn create(state: &AppState, dto: CreateCourseDto) -> Result<Course, AppError> {
        Self::ensure_category(state, dto.category_id).await?;
        UserService::find_teacher(state, dto.teacher_id).await?;

        let created = state
            .courses
            .create(NewCourse::from(dto))
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    return AppError::bad_request(course::UNIQUE_FIELDS);
                }
                AppError::unexpected(course::UNABLE_CREATE_COURSE, e)
            })?;

        info!(course.id = created.id, "Course created");
        Ok(created)
    }

    #[instrument(skip(state))]
    pub async fn update(state: &AppState, dto: UpdateCourseDto) -> Result<Course, AppError> {
        Self::get(state, dto.id).await?;

        if let Some(category_id) = dto.category_id {
            Self::ensure_category(state, category_id).await?;
        }
        if let Some(teacher_id) = dto.teacher_id {
            UserService::find_teacher(state, teacher_id).await?;
        }

        state
            .courses
            .update(dto.id, dto.changes())
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    return AppError::bad_request(course::UNIQUE_FIELDS);
                }
                AppError::unexpected(course::UNABLE_CHANGE_COURSE, e)
            })?
            .ok_or_else(|| AppError::not_found(course::NO_COURSE))
    }

    #[instrument(skip(state))]
    pub async fn delete(state: &AppState, id: i32) -> Result<(), AppError> {
        let removed = state
            .courses
            .delete(id)
            .await
            .map_err(|e| AppError::unexpected(course::UNABLE_REMOVE_COURSE, e))?;

        info!(course.id = id, removed, "Course delete processed");
        Ok(())
    }

    #[instrument(skip(state))]
    pub async fn enroll(state: &AppState, course_id: i32, user_id: i32) -> Result<(), AppError> {
        Self::get(state, course_id).await?;

        let enrolled = state
            .courses
            .enroll(course_id, user_id)
            .await
            .map_err(|e| AppError::unexpected(course::UNABLE_ENROLL, e))?;

        if !enrolled {
            return Err(AppError::bad_request(course::ALREADY_ENROLLED));
        }

        info!(course.id = course_id, user.id = user_id, "Student enrolled");
        Ok(())
    }

    #[instrument(skip(state))]
    pub async fn leave(state: &AppState, course_id: i32, user_id: i32) -> Result<(), AppError> {
        Self::get(state, course_id).await?;

        let left = state
            .courses
            .leave(course_id, user_id)
            .await
            .map_err(|e| AppError::unexpected(course::UNABLE_LEAVE, e))?;

        if !left {
            return Err(AppError::bad_request(course::NOT_ENROLLED));
        }

        info!(course.id = course_id, user.id = user_id, "Student left course");
        Ok(())
    }
}
