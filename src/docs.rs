use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use learnhub_core::{ErrorResponse, FieldError, FieldLocation, ValidationErrorResponse};
use learnhub_models::{
    AccessTokenResponse, Category, CategoryListItem, Course, CreateCategoryDto, CreateCourseDto,
    CreateMaterialDto, Material, Permission, ResultResponse, Role, RoleName, RoleWithPermissions,
    SigninRequest, SignupRequest, UpdateCategoryDto, UpdateCourseDto, UpdateMaterialDto,
    UpdateTeacherDto, User,
};

use crate::middleware::api_key::API_KEY_HEADER;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::signin,
        crate::modules::auth::controller::check_api_key,
        crate::modules::auth::controller::check_jwt,
        crate::modules::categories::controller::get_categories,
        crate::modules::categories::controller::get_category,
        crate::modules::categories::controller::create_category,
        crate::modules::categories::controller::update_category,
        crate::modules::categories::controller::delete_category,
        crate::modules::users::controller::get_teachers,
        crate::modules::users::controller::get_teacher,
        crate::modules::users::controller::update_teacher,
        crate::modules::users::controller::delete_teacher,
        crate::modules::roles::controller::get_roles,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::enroll,
        crate::modules::courses::controller::leave,
        crate::modules::materials::controller::get_materials,
        crate::modules::materials::controller::get_material,
        crate::modules::materials::controller::create_material,
        crate::modules::materials::controller::update_material,
        crate::modules::materials::controller::delete_material,
    ),
    components(
        schemas(
            SignupRequest,
            SigninRequest,
            AccessTokenResponse,
            ResultResponse,
            User,
            RoleName,
            UpdateTeacherDto,
            Role,
            Permission,
            RoleWithPermissions,
            Category,
            CategoryListItem,
            CreateCategoryDto,
            UpdateCategoryDto,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            Material,
            CreateMaterialDto,
            UpdateMaterialDto,
            ErrorResponse,
            ValidationErrorResponse,
            FieldError,
            FieldLocation,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign-up, sign-in and credential checks"),
        (name = "Categories", description = "Course categories"),
        (name = "Teachers", description = "Teacher accounts"),
        (name = "Roles", description = "Roles and their permissions"),
        (name = "Courses", description = "Courses and enrollment"),
        (name = "Materials", description = "Course materials")
    ),
    info(
        title = "LearnHub API",
        version = "0.1.0",
        description = "REST API for an educational platform: categories, teachers, courses and their materials.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}
