//! Declarative field rules for JSON request bodies.
//!
//! Request DTOs describe their fields once through [`RequestSchema`]; the
//! body extractor checks presence and JSON type against these rules before
//! serde ever sees the payload, so clients get field-level errors instead of
//! a single deserialization failure.

use serde_json::Value;

use crate::errors::FieldError;
use crate::messages::common;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// `i32` number, or a string holding one.
    Numeric,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Replaces the default `Please send required fields: ...` message.
    pub required_message: Option<&'static str>,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            required_message: None,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            required_message: None,
        }
    }

    pub const fn with_required_message(mut self, msg: &'static str) -> Self {
        self.required_message = Some(msg);
        self
    }
}

pub trait RequestSchema {
    const FIELDS: &'static [FieldRule];

    fn check(body: &Value) -> Vec<FieldError> {
        check_fields(body, Self::FIELDS)
    }
}

/// Numeric fields hold `i32` ids; larger values fail here, not in serde.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_i64().is_some_and(|v| i32::try_from(v).is_ok()),
        Value::String(s) => s.trim().parse::<i32>().is_ok(),
        _ => false,
    }
}

/// Returns one error per offending field, in rule order.
///
/// A field is missing when it is absent or `null`. Each missing required
/// field reports the full list of required fields.
pub fn check_fields(body: &Value, rules: &[FieldRule]) -> Vec<FieldError> {
    let required = rules
        .iter()
        .filter(|r| r.required)
        .map(|r| r.name)
        .collect::<Vec<_>>();

    let mut errors = Vec::new();

    for rule in rules {
        let value = body.get(rule.name).filter(|v| !v.is_null());

        let Some(value) = value else {
            if rule.required {
                let msg = rule
                    .required_message
                    .map(str::to_string)
                    .unwrap_or_else(|| common::required_fields(&required));
                errors.push(FieldError::body(rule.name, msg, None));
            }
            continue;
        };

        let type_error = match rule.kind {
            FieldKind::String if !value.is_string() => Some(common::STRING_PARAMETER),
            FieldKind::Numeric if !is_numeric(value) => Some(common::NUMERIC_PARAMETER),
            _ => None,
        };

        if let Some(msg) = type_error {
            errors.push(FieldError::body(rule.name, msg, Some(value.clone())));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: &[FieldRule] = &[
        FieldRule::required("id", FieldKind::Numeric),
        FieldRule::required("title", FieldKind::String),
        FieldRule::optional("description", FieldKind::String),
    ];

    #[test]
    fn test_missing_required_fields_list_all_required() {
        let errors = check_fields(&json!({}), RULES);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].param, "id");
        assert_eq!(errors[1].param, "title");
        assert!(errors.iter().all(|e| e.msg == "Please send required fields: id,title"));
        assert!(errors.iter().all(|e| e.value.is_none()));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let errors = check_fields(&json!({ "id": null, "title": "Rust" }), RULES);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].param, "id");
    }

    #[test]
    fn test_wrong_types_report_value() {
        let errors = check_fields(&json!({ "id": "abc", "title": 42 }), RULES);

        assert_eq!(errors[0].msg, "Parameter should be numeric");
        assert_eq!(errors[0].value, Some(json!("abc")));
        assert_eq!(errors[1].msg, "Parameter should be a string");
        assert_eq!(errors[1].value, Some(json!(42)));
    }

    #[test]
    fn test_optional_field_type_still_checked() {
        let errors = check_fields(&json!({ "id": 1, "title": "Rust", "description": [] }), RULES);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].param, "description");
    }

    #[test]
    fn test_custom_required_message() {
        const ID_ONLY: &[FieldRule] = &[FieldRule::required("id", FieldKind::Numeric)
            .with_required_message("Unable to parse id, please add id parameter")];

        let errors = check_fields(&json!({}), ID_ONLY);
        assert_eq!(errors[0].msg, "Unable to parse id, please add id parameter");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&json!(5)));
        assert!(is_numeric(&json!("17")));
        assert!(!is_numeric(&json!("17a")));
        assert!(!is_numeric(&json!("")));
        assert!(!is_numeric(&json!(1.5)));
        assert!(!is_numeric(&json!(true)));
    }

    #[test]
    fn test_is_numeric_rejects_out_of_i32_range() {
        assert!(is_numeric(&json!(2147483647)));
        assert!(is_numeric(&json!("-2147483648")));
        assert!(!is_numeric(&json!(2147483648_i64)));
        assert!(!is_numeric(&json!("99999999999")));
        assert!(!is_numeric(&json!(u64::MAX)));
    }
}
