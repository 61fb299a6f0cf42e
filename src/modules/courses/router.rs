use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::materials::init_materials_router;
use crate::state::AppState;

use super::controller::{
    create_course, delete_course, enroll, get_course, get_courses, leave, update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_courses).post(create_course).put(update_course),
        )
        .route("/{courseId}", get(get_course).delete(delete_course))
        .route("/{courseId}/enroll", post(enroll))
        .route("/{courseId}/leave", post(leave))
        .nest("/{courseId}/materials", init_materials_router())
}
