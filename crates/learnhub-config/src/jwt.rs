use crate::env::{parsed_or, string_or};

pub const DEFAULT_EXPIRES_IN: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expires_in: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_in,
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: string_or("JWT_SECRET", "your-secret-key-change-in-production"),
            expires_in: parsed_or("JWT_EXPIRES_IN", DEFAULT_EXPIRES_IN), // 1 hour
        }
    }
}
