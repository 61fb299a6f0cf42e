use axum::{extract::FromRequestParts, http::request::Parts};
use learnhub_core::AppError;
use learnhub_core::messages::common;

use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Passes when the `x-api-key` header equals the configured key.
#[derive(Debug, Clone, Copy)]
pub struct ApiKey;

impl FromRequestParts<AppState> for ApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if !state.api_key_config.matches(provided.trim()) {
            return Err(AppError::unauthorized(common::UNAUTHORIZED));
        }

        Ok(ApiKey)
    }
}
