//! Request extractors that report failures as field-level errors.
//!
//! - [`ValidatedJson`] checks the raw JSON against the DTO's
//!   [`RequestSchema`] rules (presence and type), then deserializes it, then
//!   runs its `validator` rules.
//! - [`NumericPath`] requires every path parameter to be an integer.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use learnhub_core::messages::common;
use learnhub_core::{AppError, FieldError, RequestSchema};

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Flattens `validator` output into one error per field, ordered like the
/// schema rules.
fn field_errors<T: RequestSchema>(errors: &ValidationErrors, body: &Value) -> Vec<FieldError> {
    let mut failed = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let param = camel_case(&field);
            let msg = errs
                .first()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", param))
                })?;
            Some((param, msg))
        })
        .collect::<Vec<_>>();

    let position = |param: &str| {
        T::FIELDS
            .iter()
            .position(|rule| rule.name == param)
            .unwrap_or(usize::MAX)
    };
    failed.sort_by(|(a, _), (b, _)| position(a).cmp(&position(b)).then_with(|| a.cmp(b)));

    failed
        .into_iter()
        .map(|(param, msg)| {
            let value = body.get(&param).cloned();
            FieldError::body(param, msg, value)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + RequestSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::bad_request(common::INVALID_BODY))?;

        // An empty body is treated as `{}` so every required field is reported.
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice::<Value>(&bytes)
                .map_err(|_| AppError::bad_request(common::INVALID_BODY))?
        };

        let schema_errors = T::check(&body);
        if !schema_errors.is_empty() {
            return Err(AppError::validation(schema_errors));
        }

        let value = serde_json::from_value::<T>(body.clone())
            .map_err(|e| AppError::bad_request(format!("{}: {}", common::INVALID_BODY, e)))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(field_errors::<T>(&errors, &body)))?;

        Ok(ValidatedJson(value))
    }
}

/// Path extractor whose parameters must all be integers.
#[derive(Debug, Clone, Copy)]
pub struct NumericPath<T>(pub T);

impl<T, S> FromRequestParts<S> for NumericPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let mut params = Map::new();
        let mut errors = Vec::new();

        for (name, value) in raw {
            match value.trim().parse::<i32>() {
                Ok(number) => {
                    params.insert(name, Value::from(number));
                }
                Err(_) => errors.push(FieldError::params(
                    name,
                    common::NUMERIC_PARAMETER,
                    Some(Value::String(value)),
                )),
            }
        }

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        serde_json::from_value(Value::Object(params))
            .map(NumericPath)
            .map_err(|_| AppError::bad_request(common::UNABLE_TO_PARSE_ID))
    }
}
