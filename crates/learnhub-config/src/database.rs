//! Database connection settings.
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)

use std::env;

use crate::env::parsed_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Returns `None` when `DATABASE_URL` is not set.
    pub fn from_env() -> Option<Self> {
        let url = env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty())?;

        Some(Self {
            url,
            max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", 10),
        })
    }
}
