//! Access token issuing and verification (HS256).

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use learnhub_config::JwtConfig;
use learnhub_core::AppError;

use crate::claims::Claims;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is expired")]
    Expired,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token: {0}")]
    Malformed(String),
}

pub fn create_access_token(
    user_id: i32,
    username: &str,
    role: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    create_token_with_expiry(user_id, username, role, jwt_config.expires_in, jwt_config)
}

/// Signs a token that expires `expires_in` seconds from now. A negative
/// value yields an already expired token.
pub fn create_token_with_expiry(
    user_id: i32,
    username: &str,
    role: &str,
    expires_in: i64,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role: role.to_string(),
        exp: now + expires_in,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::unexpected("Failed to create token: ", e))
}

pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret-key-at-least-32-characters-long", 3600)
    }

    #[test]
    fn test_verify_token_success() {
        let config = get_test_jwt_config();
        let token = create_access_token(42, "jdoe", "teacher", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "jdoe");
        assert_eq!(claims.role, "teacher");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token() {
        let config = get_test_jwt_config();
        let token = create_token_with_expiry(1, "jdoe", "student", -120, &config).unwrap();

        assert_eq!(verify_token(&token, &config), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(1, "jdoe", "student", &config).unwrap();
        let other = JwtConfig::new("different-secret-key-at-least-32-characters", 3600);

        assert_eq!(verify_token(&token, &other), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let config = get_test_jwt_config();

        assert!(matches!(
            verify_token("invalid-token", &config),
            Err(TokenError::Malformed(_))
        ));
    }
}
