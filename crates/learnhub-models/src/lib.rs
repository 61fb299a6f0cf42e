//! # LearnHub Models
//!
//! Domain models and DTOs for the LearnHub API.
//!
//! Entities derive [`sqlx::FromRow`]; request DTOs derive
//! [`validator::Validate`] and implement
//! [`learnhub_core::RequestSchema`] so the body extractor can report
//! missing or mistyped fields before deserialization. All payloads use
//! camelCase keys on the wire.

pub mod auth;
pub mod categories;
pub mod courses;
pub mod materials;
pub mod params;
pub mod roles;
pub mod tokens;
pub mod users;
pub mod validators;

pub use auth::{AccessTokenResponse, Claims, ResultResponse, SigninRequest, SignupRequest};
pub use categories::{Category, CategoryListItem, CreateCategoryDto, UpdateCategoryDto};
pub use courses::{Course, CourseChanges, CreateCourseDto, NewCourse, UpdateCourseDto};
pub use materials::{
    CreateMaterialDto, Material, MaterialChanges, NewMaterial, UpdateMaterialDto,
};
pub use params::{CourseParams, IdParams, MaterialParams};
pub use roles::{Permission, Role, RoleWithPermissions};
pub use tokens::JwtAuth;
pub use users::{NewUser, RoleName, UpdateTeacherDto, User, UserChanges, UserRecord};
