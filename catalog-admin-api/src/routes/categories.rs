use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Json;
use catalog_admin::EntityKind;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Category;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub section_id: Option<String>,
}

/// GET /api/categories?sectionId=...
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Value>>, AppError> {
    let Some(section_id) = params.section_id else {
        return super::list(&state, KIND).await;
    };
    let items = state
        .catalog
        .run(move |c| c.categories().list_by_section(&section_id))
        .await?;
    Ok(super::client_list(KIND, items))
}

/// POST /api/categories
///
/// A duplicate name (case-insensitive) is rejected before the image is
/// uploaded.
pub async fn create(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    super::save_with_image(&state, KIND, None, multipart).await
}

/// PUT /api/categories/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    super::save_with_image(&state, KIND, Some(id), multipart).await
}

/// DELETE /api/categories/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    super::delete(&state, KIND, id).await
}
