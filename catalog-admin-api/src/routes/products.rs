use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Json;
use catalog_admin::{media, schema, EntityKind};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::form::{FileField, FormData};
use crate::state::AppState;

const KIND: EntityKind = EntityKind::Product;

pub const THUMBNAIL_FIELD: &str = "thumbnail";
pub const GALLERY_FIELD: &str = "images";
pub const MAX_GALLERY_IMAGES: usize = 5;

const ACCEPTED_FILES: [FileField; 2] = [
    FileField::single(THUMBNAIL_FIELD),
    FileField::many(GALLERY_FIELD, MAX_GALLERY_IMAGES),
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub category_id: Option<String>,
}

/// GET /api/products?categoryId=...
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Value>>, AppError> {
    let Some(category_id) = params.category_id else {
        return super::list(&state, KIND).await;
    };
    let items = state
        .catalog
        .run(move |c| c.products().list_by_category(&category_id))
        .await?;
    Ok(super::client_list(KIND, items))
}

/// POST /api/products
pub async fn create(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    save(&state, None, multipart).await
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    save(&state, Some(id), multipart).await
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    super::delete(&state, KIND, id).await
}

/// Upload a new thumbnail and gallery images, then write the product.
///
/// New gallery images are appended to `imageUrls` from the form, or to the
/// stored list when the form does not send one. A replaced thumbnail is
/// deleted after the write.
async fn save(
    state: &AppState,
    id: Option<String>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut form = FormData::read(multipart, &ACCEPTED_FILES).await?;
    let mut item = schema::coerce_form(KIND, &form.fields)?;
    let existing = match &id {
        Some(id) => Some(super::fetch(state, KIND, id).await?),
        None => None,
    };
    let slug = super::upload_slug(KIND, &item, existing.as_ref());

    let mut replaced = None;
    if let Some(file) = form.take_file(THUMBNAIL_FIELD) {
        let key = media::thumbnail_key(&slug, media::now_millis(), file.extension());
        let url = state.media.upload(&key, file).await?;
        replaced = existing
            .as_ref()
            .and_then(|e| super::text(e, "thumbnailUrl"))
            .map(str::to_string);
        item.insert("thumbnailUrl".to_string(), Value::String(url));
    }

    let gallery = form.take_files(GALLERY_FIELD);
    if !gallery.is_empty() {
        let mut urls = match item.remove("imageUrls") {
            Some(Value::Array(urls)) => urls,
            _ => existing
                .as_ref()
                .and_then(|e| e.get("imageUrls"))
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
        };
        for file in gallery {
            let key = media::gallery_key(
                &slug,
                media::now_millis(),
                media::random_nonce(),
                file.extension(),
            );
            urls.push(Value::String(state.media.upload(&key, file).await?));
        }
        item.insert("imageUrls".to_string(), Value::Array(urls));
    }

    let saved = super::persist(state, KIND, id, item).await?;
    if let Some(old) = replaced {
        if saved.get("thumbnailUrl").and_then(Value::as_str) != Some(old.as_str()) {
            state.media.discard(&old).await;
        }
    }
    Ok(Json(saved))
}
