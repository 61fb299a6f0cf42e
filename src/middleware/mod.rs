//! Extractors for authentication and authorization.
//!
//! - [`auth`]: JWT bearer authentication and role guards
//! - [`api_key`]: Static API key check
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireAdmin};
//!
//! // Any valid token
//! async fn list_courses(auth_user: AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! // Admins only
//! async fn create_course(RequireAdmin(auth_user): RequireAdmin) -> impl IntoResponse { /* ... */ }
//! ```

pub mod api_key;
pub mod auth;
