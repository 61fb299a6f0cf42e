//! # LearnHub Auth
//!
//! Authentication types and JWT utilities for the LearnHub API.
//!
//! - [`claims`]: JWT claim structure embedded in access tokens
//! - [`jwt`]: Token creation and verification
//!
//! Verification failures are typed ([`TokenError`]) so callers can tell an
//! expired token apart from a forged or malformed one.
//!
//! # Example
//!
//! ```ignore
//! use learnhub_auth::{create_access_token, verify_token, TokenError};
//! use learnhub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(42, "jdoe", "student", &config)?;
//!
//! match verify_token(&token, &config) {
//!     Ok(claims) => println!("User ID: {}", claims.sub),
//!     Err(TokenError::Expired) => println!("sign in again"),
//!     Err(e) => println!("rejected: {}", e),
//! }
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TokenError, create_access_token, create_token_with_expiry, verify_token};
