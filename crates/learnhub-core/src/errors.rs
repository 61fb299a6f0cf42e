use std::fmt::{Debug, Display};

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

/// Where a rejected request value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Body,
    Params,
}

/// A single field-level validation failure.
///
/// Serialized as `{"value": ..., "msg": ..., "param": ..., "location": ...}`;
/// `value` is omitted when the field was absent from the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<serde_json::Value>,
    pub msg: String,
    pub param: String,
    pub location: FieldLocation,
}

impl FieldError {
    pub fn new(
        param: impl Into<String>,
        location: FieldLocation,
        msg: impl Into<String>,
        value: Option<serde_json::Value>,
    ) -> Self {
        Self {
            value,
            msg: msg.into(),
            param: param.into(),
            location,
        }
    }

    pub fn body(param: impl Into<String>, msg: impl Into<String>, value: Option<serde_json::Value>) -> Self {
        Self::new(param, FieldLocation::Body, msg, value)
    }

    pub fn params(param: impl Into<String>, msg: impl Into<String>, value: Option<serde_json::Value>) -> Self {
        Self::new(param, FieldLocation::Params, msg, value)
    }
}

/// Error body carrying a single message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: String,
}

/// Error body carrying field validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub fields: Vec<FieldError>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            fields: Vec::new(),
        }
    }

    fn message<M>(status: StatusCode, msg: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::new(status, Error::msg(msg))
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// 500 whose message is a domain prefix followed by the underlying error,
    /// e.g. `Unable to create category: <driver error>`.
    pub fn unexpected(prefix: &str, err: impl Display) -> Self {
        Self::message(StatusCode::INTERNAL_SERVER_ERROR, format!("{}{}", prefix, err))
    }

    pub fn not_found<M>(msg: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::message(StatusCode::NOT_FOUND, msg)
    }

    pub fn bad_request<M>(msg: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::message(StatusCode::BAD_REQUEST, msg)
    }

    pub fn unauthorized<M>(msg: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::message(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn forbidden<M>(msg: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::message(StatusCode::FORBIDDEN, msg)
    }

    /// 400 carrying one or more field failures.
    pub fn validation(fields: Vec<FieldError>) -> Self {
        let summary = fields
            .iter()
            .map(|f| format!("{}: {}", f.param, f.msg))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            status: StatusCode::BAD_REQUEST,
            error: Error::msg(summary),
            fields,
        }
    }

    pub fn is_validation(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = %self.error, "Request failed");
        }

        let body = if self.fields.is_empty() {
            Json(json!({ "errors": self.error.to_string() }))
        } else {
            Json(json!({ "errors": self.fields }))
        };

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
