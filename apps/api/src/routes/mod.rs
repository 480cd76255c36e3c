pub mod health;
pub mod render;

use axum::{
    routing::{get, post},
    Router,
};

use crate::designs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Design registry
        .route("/api/v1/designs", get(handlers::handle_list_designs))
        .route("/api/v1/designs/:id", get(handlers::handle_get_design))
        // Portfolio rendering
        .route("/api/v1/portfolio/render", post(render::handle_render))
        .with_state(state)
}
