use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Json;
use catalog_admin::EntityKind;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Banner;

#[derive(Deserialize)]
pub struct ListParams {
    pub position: Option<String>,
}

/// GET /api/banners?position=HOME_HERO
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Value>>, AppError> {
    let Some(position) = params.position else {
        return super::list(&state, KIND).await;
    };
    let items = state
        .catalog
        .run(move |c| c.banners().list_by_position(&position))
        .await?;
    Ok(super::client_list(KIND, items))
}

/// POST /api/banners
///
/// `CATEGORY_TOP` banners need a `categoryId`; any `redirectType` other than
/// `NONE` needs a `redirectValue`.
pub async fn create(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    super::save_with_image(&state, KIND, None, multipart).await
}

/// PUT /api/banners/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    super::save_with_image(&state, KIND, Some(id), multipart).await
}

/// DELETE /api/banners/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    super::delete(&state, KIND, id).await
}
