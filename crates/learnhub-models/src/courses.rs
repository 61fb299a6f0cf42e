use chrono::{DateTime, Utc};
use learnhub_core::serde::{deserialize_numeric, deserialize_optional_numeric};
use learnhub_core::{FieldKind, FieldRule, RequestSchema};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_course_title, validate_description};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub teacher_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub teacher_id: i32,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(custom(function = "validate_course_title"))]
    #[schema(example = "Rust Basics")]
    pub title: String,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_numeric")]
    pub category_id: i32,
    #[serde(deserialize_with = "deserialize_numeric")]
    pub teacher_id: i32,
}

impl RequestSchema for CreateCourseDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("title", FieldKind::String),
        FieldRule::optional("description", FieldKind::String),
        FieldRule::required("categoryId", FieldKind::Numeric),
        FieldRule::required("teacherId", FieldKind::Numeric),
    ];
}

impl From<CreateCourseDto> for NewCourse {
    fn from(dto: CreateCourseDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            category_id: dto.category_id,
            teacher_id: dto.teacher_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[serde(deserialize_with = "deserialize_numeric")]
    pub id: i32,
    #[validate(custom(function = "validate_course_title"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_numeric")]
    pub category_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_numeric")]
    pub teacher_id: Option<i32>,
}

impl RequestSchema for UpdateCourseDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("id", FieldKind::Numeric),
        FieldRule::optional("title", FieldKind::String),
        FieldRule::optional("description", FieldKind::String),
        FieldRule::optional("categoryId", FieldKind::Numeric),
        FieldRule::optional("teacherId", FieldKind::Numeric),
    ];
}

impl UpdateCourseDto {
    pub fn changes(&self) -> CourseChanges {
        CourseChanges {
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: self.category_id,
            teacher_id: self.teacher_id,
        }
    }
}
