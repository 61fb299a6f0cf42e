//! # LearnHub Core
//!
//! Core types, errors, and utilities for the LearnHub API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`messages`]: Client-facing message catalogue
//! - [`password`]: Password hashing and verification
//! - [`schema`]: Declarative field rules used by request validation
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use learnhub_core::errors::AppError;
//! use learnhub_core::messages;
//! use learnhub_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(messages::category::NO_CATEGORY);
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod messages;
pub mod password;
pub mod schema;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse, FieldError, FieldLocation, ValidationErrorResponse};
pub use password::{hash_password, hash_password_with_cost, verify_password};
pub use schema::{FieldKind, FieldRule, RequestSchema};
