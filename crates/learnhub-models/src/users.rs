//! User domain models and DTOs.

use chrono::{DateTime, Utc};
use learnhub_core::messages::common;
use learnhub_core::serde::deserialize_numeric;
use learnhub_core::{FieldKind, FieldRule, RequestSchema};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_email, validate_login, validate_name};

/// Seeded role names. Role ids are not fixed; lookups go through the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Teacher,
    Student,
}

impl RoleName {
    /// Roles a visitor may pick when signing up.
    pub const SIGNUP: [RoleName; 2] = [RoleName::Student, RoleName::Teacher];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Teacher => "teacher",
            RoleName::Student => "student",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(RoleName::Admin),
            "teacher" => Some(RoleName::Teacher),
            "student" => Some(RoleName::Student),
            _ => None,
        }
    }

    pub fn signup_names() -> Vec<&'static str> {
        Self::SIGNUP.iter().map(RoleName::as_str).collect()
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user row joined with its role name. Carries the password hash and is
/// never serialized directly.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub password: String,
    pub role: i32,
    pub role_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub role: i32,
    pub role_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            login: record.login,
            email: record.email,
            role: record.role,
            role_name: record.role_name,
            first_name: record.first_name,
            last_name: record.last_name,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub email: String,
    /// bcrypt hash
    pub password: String,
    pub role: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub login: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Body of `PUT /teacher`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherDto {
    #[serde(deserialize_with = "deserialize_numeric")]
    #[schema(example = 2)]
    pub id: i32,
    #[validate(custom(function = "validate_login"))]
    pub login: Option<String>,
    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_name"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "validate_name"))]
    pub last_name: Option<String>,
}

impl RequestSchema for UpdateTeacherDto {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("id", FieldKind::Numeric)
            .with_required_message(common::UNABLE_TO_PARSE_ID),
        FieldRule::optional("login", FieldKind::String),
        FieldRule::optional("email", FieldKind::String),
        FieldRule::optional("firstName", FieldKind::String),
        FieldRule::optional("lastName", FieldKind::String),
    ];
}

impl UpdateTeacherDto {
    pub fn changes(&self) -> UserChanges {
        UserChanges {
            login: self.login.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> UserRecord {
        UserRecord {
            id: 1,
            login: "jdoe".into(),
            email: "jdoe@example.com".into(),
            password: "$2b$04$hash".into(),
            role: 2,
            role_name: "teacher".into(),
            first_name: Some("John".into()),
            last_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_never_serializes_password() {
        let user = User::from(record());
        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("password").is_none());
        assert_eq!(value["roleName"], "teacher");
        assert_eq!(value["firstName"], "John");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_role_name_parse() {
        assert_eq!(RoleName::parse("teacher"), Some(RoleName::Teacher));
        assert_eq!(RoleName::parse("Teacher"), None);
        assert_eq!(RoleName::signup_names(), vec!["student", "teacher"]);
    }

    #[test]
    fn test_update_teacher_accepts_string_id() {
        let dto: UpdateTeacherDto =
            serde_json::from_value(json!({ "id": "5", "firstName": "Ann" })).unwrap();

        assert_eq!(dto.id, 5);
        assert_eq!(dto.changes().first_name.as_deref(), Some("Ann"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_teacher_rejects_bad_email() {
        let dto: UpdateTeacherDto =
            serde_json::from_value(json!({ "id": 5, "email": "nope" })).unwrap();

        assert!(dto.validate().is_err());
    }
}
