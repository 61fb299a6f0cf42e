use axum::{Json, extract::State};
use tracing::instrument;

use learnhub_core::messages::{common, course};
use learnhub_core::{AppError, ErrorResponse, ValidationErrorResponse};
use learnhub_models::{Course, CourseParams, CreateCourseDto, ResultResponse, UpdateCourseDto};

use crate::middleware::auth::{AuthUser, RequireAdmin, RequireStudent};
use crate::state::AppState;
use crate::validator::{NumericPath, ValidatedJson};

use super::service::CourseService;

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "All courses", body = Vec<Course>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn get_courses(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list(&state).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{courseId}",
    params(CourseParams),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 400, description = "Non-numeric id", body = ValidationErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn get_course(
    State(state): State<AppState>,
    _user: AuthUser,
    NumericPath(params): NumericPath<CourseParams>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get(&state, params.course_id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Course created", body = Course),
        (status = 400, description = "Validation error or duplicate title", body = ValidationErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Category or teacher not found", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn create_course(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::create(&state, dto).await?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/v1/courses",
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 400, description = "Validation error or duplicate title", body = ValidationErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Course, category or teacher not found", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn update_course(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::update(&state, dto).await?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{courseId}",
    params(CourseParams),
    responses(
        (status = 200, description = "Removed, or nothing to remove", body = ResultResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_course(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    NumericPath(params): NumericPath<CourseParams>,
) -> Result<Json<ResultResponse>, AppError> {
    CourseService::delete(&state, params.course_id).await?;
    Ok(Json(ResultResponse::new(common::REMOVE_SUCCESS)))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/{courseId}/enroll",
    params(CourseParams),
    responses(
        (status = 200, description = "Enrolled", body = ResultResponse),
        (status = 400, description = "Already enrolled", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, student))]
pub async fn enroll(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    NumericPath(params): NumericPath<CourseParams>,
) -> Result<Json<ResultResponse>, AppError> {
    CourseService::enroll(&state, params.course_id, student.user_id()?).await?;
    Ok(Json(ResultResponse::new(course::ENROLL_SUCCESS)))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/{courseId}/leave",
    params(CourseParams),
    responses(
        (status = 200, description = "Left the course", body = ResultResponse),
        (status = 400, description = "Not enrolled", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, student))]
pub async fn leave(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    NumericPath(params): NumericPath<CourseParams>,
) -> Result<Json<ResultResponse>, AppError> {
    CourseService::leave(&state, params.course_id, student.user_id()?).await?;
    Ok(Json(ResultResponse::new(course::LEAVE_SUCCESS)))
}
