use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{delete_teacher, get_teacher, get_teachers, update_teacher};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/teachers", get(get_teachers))
        .route("/teachers/{id}", get(get_teacher).delete(delete_teacher))
        .route("/teacher", put(update_teacher))
}
