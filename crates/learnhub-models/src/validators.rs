//! Custom field validators used by the request DTOs.
//!
//! Each function reports the first failing rule only, carrying the
//! client-facing message from [`learnhub_core::messages`].

use std::borrow::Cow;

use learnhub_core::messages::{category, common, course, login, material, user};
use validator::{ValidateEmail, ValidationError};

pub const TITLE_MIN_LENGTH: usize = 3;
pub const TITLE_MAX_LENGTH: usize = 50;

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Latin and Cyrillic letters (including `Ёё`) and spaces.
pub fn is_alphabetic_title(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| {
            c == ' '
                || c.is_ascii_alphabetic()
                || ('А'..='я').contains(&c)
                || c == 'Ё'
                || c == 'ё'
        })
}

fn check_title(
    value: &str,
    min_message: String,
    max_message: String,
) -> Result<(), ValidationError> {
    if !is_alphabetic_title(value) {
        return Err(error("alphabet", common::ONLY_ALPHABET_ALLOWED));
    }

    let length = value.chars().count();
    if length < TITLE_MIN_LENGTH {
        return Err(error("min_length", min_message));
    }
    if length > TITLE_MAX_LENGTH {
        return Err(error("max_length", max_message));
    }

    Ok(())
}

pub fn validate_category_title(value: &str) -> Result<(), ValidationError> {
    check_title(
        value,
        category::wrong_min_length(TITLE_MIN_LENGTH),
        category::wrong_max_length(TITLE_MAX_LENGTH),
    )
}

pub fn validate_course_title(value: &str) -> Result<(), ValidationError> {
    check_title(
        value,
        course::wrong_min_length(TITLE_MIN_LENGTH),
        course::wrong_max_length(TITLE_MAX_LENGTH),
    )
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > 1000 {
        return Err(error("length", course::DESCRIPTION_LENGTH));
    }
    Ok(())
}

pub fn validate_login(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if !(3..=30).contains(&length) {
        return Err(error("length", login::LOGIN_LENGTH));
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.validate_email() {
        return Err(error("email", login::INVALID_EMAIL));
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < 6 {
        return Err(error("length", login::PASSWORD_LENGTH));
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > 50 {
        return Err(error("length", user::NAME_LENGTH));
    }
    Ok(())
}

pub fn validate_material_title(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if !(1..=100).contains(&length) {
        return Err(error("length", material::TITLE_LENGTH));
    }
    Ok(())
}

pub fn validate_material_content(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if !(1..=10_000).contains(&length) {
        return Err(error("length", material::CONTENT_LENGTH));
    }
    Ok(())
}
