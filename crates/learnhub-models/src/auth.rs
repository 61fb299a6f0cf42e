//! Authentication DTOs.

use learnhub_core::{FieldKind, FieldRule, RequestSchema};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_email, validate_login, validate_name, validate_password};

pub use learnhub_auth::Claims;

/// Body of `POST /signup`. `role` is checked against the signup roles by
/// the service so the client gets the list of allowed values back.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(custom(function = "validate_login"))]
    #[schema(example = "jdoe")]
    pub login: String,
    #[validate(custom(function = "validate_email"))]
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    #[validate(custom(function = "validate_password"))]
    #[schema(example = "secret123")]
    pub password: String,
    #[schema(example = "student")]
    pub role: String,
    #[validate(custom(function = "validate_name"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "validate_name"))]
    pub last_name: Option<String>,
}

impl RequestSchema for SignupRequest {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("login", FieldKind::String),
        FieldRule::required("email", FieldKind::String),
        FieldRule::required("password", FieldKind::String),
        FieldRule::required("role", FieldKind::String),
        FieldRule::optional("firstName", FieldKind::String),
        FieldRule::optional("lastName", FieldKind::String),
    ];
}

/// Body of `POST /signin`. `username` matches either login or email.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    #[schema(example = "jdoe")]
    pub username: String,
    #[schema(example = "secret123")]
    pub password: String,
}

impl RequestSchema for SigninRequest {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::required("username", FieldKind::String),
        FieldRule::required("password", FieldKind::String),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Generic success body: `{"result": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}
