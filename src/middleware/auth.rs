use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use learnhub_auth::{Claims, TokenError, verify_token};
use learnhub_core::AppError;
use learnhub_core::messages::{auth, common};
use learnhub_models::RoleName;
use tracing::debug;

use crate::state::AppState;

/// Extractor that validates the JWT and provides the caller's claims.
///
/// Accepts `Authorization: Bearer <jwt>` as well as a bare token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<i32, AppError> {
        self.0
            .user_id()
            .ok_or_else(|| AppError::unauthorized(common::UNAUTHORIZED))
    }

    pub fn role(&self) -> Option<RoleName> {
        RoleName::parse(&self.0.role)
    }

    pub fn has_role(&self, role: RoleName) -> bool {
        self.role() == Some(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(RoleName::Admin)
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

pub(crate) fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())?
        .trim();

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(parts).ok_or_else(|| AppError::unauthorized(common::UNAUTHORIZED))?;

        let claims = verify_token(token, &state.jwt_config).map_err(|e| {
            debug!(error = %e, "Rejected access token");
            match e {
                TokenError::Expired => AppError::unauthorized(auth::EXPIRED_TOKEN),
                _ => AppError::unauthorized(common::UNAUTHORIZED),
            }
        })?;

        Ok(AuthUser(claims))
    }
}

/// Defines an extractor that authenticates the caller and requires one of
/// the given roles.
#[macro_export]
macro_rules! require_role {
    ($name:ident, $($role:expr),+) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = learnhub_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                if ![$($role),+].iter().any(|role| auth_user.has_role(*role)) {
                    return Err(learnhub_core::AppError::forbidden(
                        learnhub_core::messages::auth::ACCESS_DENIED,
                    ));
                }

                Ok($name(auth_user))
            }
        }
    };
}

require_role!(RequireAdmin, RoleName::Admin);
require_role!(RequireStudent, RoleName::Student);
