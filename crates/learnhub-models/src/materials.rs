use chrono::{DateTime, Utc};
use learnhub_core::serde::deserialize_numeric;
use learnhub_core::{FieldKind, FieldRule, RequestSchema};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_material_content, validate_material_title};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub course_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub title: String,
    pub content: String,
    pub course_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct MaterialChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMaterialDto {
    #[validate(custom(function = "validate_material_title"))]
    #[schema(example = "Ownership")]
    pub title: String,
    #[validate(custom(function = "validate_material_content"))]
    pub content: String,
}

impl RequestSchema for CreateMaterialDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("title", FieldKind::String),
        FieldRule::required("content", FieldKind::String),
    ];
}

impl CreateMaterialDto {
    pub fn into_new(self, course_id: i32) -> NewMaterial {
        NewMaterial {
            title: self.title,
            content: self.content,
            course_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateMaterialDto {
    #[serde(deserialize_with = "deserialize_numeric")]
    pub id: i32,
    #[validate(custom(function = "validate_material_title"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_material_content"))]
    pub content: Option<String>,
}

impl RequestSchema for UpdateMaterialDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("id", FieldKind::Numeric),
        FieldRule::optional("title", FieldKind::String),
        FieldRule::optional("content", FieldKind::String),
    ];
}

impl UpdateMaterialDto {
    pub fn changes(&self) -> MaterialChanges {
        MaterialChanges {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}
