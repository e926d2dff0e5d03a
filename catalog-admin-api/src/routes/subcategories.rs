use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use catalog_admin::EntityKind;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::AppError;
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Subcategory;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub category_id: Option<String>,
}

/// GET /api/subcategories?categoryId=...
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Value>>, AppError> {
    let Some(category_id) = params.category_id else {
        return super::list(&state, KIND).await;
    };
    let items = state
        .catalog
        .run(move |c| c.subcategories().list_by_category(&category_id))
        .await?;
    Ok(super::client_list(KIND, items))
}

/// POST /api/subcategories (JSON body, no image)
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(super::persist(&state, KIND, None, body).await?))
}

/// PUT /api/subcategories/:id
///
/// Moving a subcategory to another category deletes it from the old
/// category's partition and writes it under the new one.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(super::persist(&state, KIND, Some(id), body).await?))
}

/// DELETE /api/subcategories/:id
///
/// Unlike the other entities, an unknown id is a 404.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if super::remove(&state, KIND, id).await? {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(AppError::not_found("Subcategory not found"))
    }
}
