use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::response::Json;
use catalog_admin::EntityKind;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Section;

/// GET /api/sections
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, AppError> {
    super::list(&state, KIND).await
}

/// POST /api/sections
pub async fn create(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    super::save_with_image(&state, KIND, None, multipart).await
}

/// PUT /api/sections/:id
///
/// Fields left out of the form keep their stored values.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    super::save_with_image(&state, KIND, Some(id), multipart).await
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    super::delete(&state, KIND, id).await
}
