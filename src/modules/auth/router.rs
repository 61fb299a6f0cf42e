use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{check_api_key, check_jwt, signin, signup};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/auth/api-key", get(check_api_key))
        .route("/auth/jwt", get(check_jwt))
}
