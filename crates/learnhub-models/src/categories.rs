use chrono::{DateTime, Utc};
use learnhub_core::serde::deserialize_numeric;
use learnhub_core::{FieldKind, FieldRule, RequestSchema};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_category_title;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List view of a category; timestamps are stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryListItem {
    pub id: i32,
    pub title: String,
}

impl From<Category> for CategoryListItem {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            title: category.title,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(custom(function = "validate_category_title"))]
    #[schema(example = "Programming")]
    pub title: String,
}

impl RequestSchema for CreateCategoryDto {
    const FIELDS: &'static [FieldRule] = &[FieldRule::required("title", FieldKind::String)];
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[serde(deserialize_with = "deserialize_numeric")]
    #[schema(example = 1)]
    pub id: i32,
    #[validate(custom(function = "validate_category_title"))]
    #[schema(example = "Design")]
    pub title: String,
}

impl RequestSchema for UpdateCategoryDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("id", FieldKind::Numeric),
        FieldRule::required("title", FieldKind::String),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_item_strips_timestamps() {
        let category = Category {
            id: 4,
            title: "Music".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(CategoryListItem::from(category)).unwrap();
        assert_eq!(value, json!({ "id": 4, "title": "Music" }));
    }

    #[test]
    fn test_update_requires_both_fields() {
        let errors = UpdateCategoryDto::check(&json!({}));

        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .iter()
                .all(|e| e.msg == "Please send required fields: id,title")
        );
    }
}
