//! # LearnHub Config
//!
//! Configuration types for the LearnHub API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: JWT signing secret and token lifetime
//! - [`api_key`]: Static API key accepted by the api-key endpoint
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`password`]: bcrypt cost
//! - [`server`]: Bind address
//! - [`database`]: Connection string and pool size
//!
//! # Example
//!
//! ```ignore
//! use learnhub_config::{JwtConfig, CorsConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod api_key;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod password;
pub mod server;

mod env;

// Re-export commonly used types at crate root
pub use api_key::ApiKeyConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use password::PasswordConfig;
pub use server::ServerConfig;
