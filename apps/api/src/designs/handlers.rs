use axum::{
    extract::{Path, State},
    Json,
};

use crate::designs::registry::DesignMetadata;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/designs
pub async fn handle_list_designs(
    State(state): State<AppState>,
) -> Result<Json<Vec<DesignMetadata>>, AppError> {
    let designs = state
        .registry
        .all_metadata()
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(designs))
}

/// GET /api/v1/designs/:id
///
/// Registry fallback contract: an unknown id resolves to the default design's
/// metadata, so this endpoint always answers 200.
pub async fn handle_get_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DesignMetadata>, AppError> {
    Ok(Json(state.registry.resolve_metadata(&id).clone()))
}
