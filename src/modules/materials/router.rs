use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_material, delete_material, get_material, get_materials, update_material,
};

/// Nested under `/courses/{courseId}/materials`.
pub fn init_materials_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_materials)
                .post(create_material)
                .put(update_material),
        )
        .route("/{materialId}", get(get_material).delete(delete_material))
}
