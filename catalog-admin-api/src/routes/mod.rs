//! Route handlers, one module per entity, plus the plumbing they share.

pub mod auth;
pub mod banners;
pub mod categories;
pub mod products;
pub mod sections;
pub mod subcategories;

use axum::extract::Multipart;
use axum::response::Json;
use catalog_admin::media;
use catalog_admin::{mapper, schema, EntityKind};
use serde_json::{json, Map, Value};

use crate::error::AppError;
use crate::form::{FileField, FormData};
use crate::state::AppState;

/// Multipart field carrying the single image of a section, category or banner.
pub const IMAGE_FIELD: &str = "image";

/// GET: every item of `kind`, in client shape, as a bare array.
pub(crate) async fn list(
    state: &AppState,
    kind: EntityKind,
) -> Result<Json<Vec<Value>>, AppError> {
    let items = state.catalog.run(move |c| c.store(kind).list()).await?;
    Ok(client_list(kind, items))
}

pub(crate) fn client_list(kind: EntityKind, items: Vec<Value>) -> Json<Vec<Value>> {
    Json(
        items
            .into_iter()
            .map(|item| mapper::from_storage(kind, item))
            .collect(),
    )
}

/// DELETE: `{"success": true}` whether or not the item existed.
pub(crate) async fn delete(
    state: &AppState,
    kind: EntityKind,
    id: String,
) -> Result<Json<Value>, AppError> {
    remove(state, kind, id).await?;
    Ok(Json(json!({ "success": true })))
}

pub(crate) async fn remove(
    state: &AppState,
    kind: EntityKind,
    id: String,
) -> Result<bool, AppError> {
    Ok(state.catalog.run(move |c| c.store(kind).delete(&id)).await?)
}

/// The stored item in client shape, or 404.
pub(crate) async fn fetch(
    state: &AppState,
    kind: EntityKind,
    id: &str,
) -> Result<Map<String, Value>, AppError> {
    let lookup = id.to_string();
    let found = state.catalog.run(move |c| c.store(kind).get(&lookup)).await?;
    match found.map(|item| mapper::from_storage(kind, item)) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(AppError::not_found(format!("{} {} not found", kind.label(), id))),
    }
}

/// Reject a duplicate name before any image is uploaded for it.
pub(crate) async fn ensure_name_available(
    state: &AppState,
    kind: EntityKind,
    name: String,
    exclude_id: Option<String>,
) -> Result<(), AppError> {
    if !kind.has_unique_names() {
        return Ok(());
    }
    state
        .catalog
        .run(move |c| c.store(kind).ensure_name_available(&name, exclude_id.as_deref()))
        .await?;
    Ok(())
}

/// Create (`id == None`) or update a client-shape item; returns client shape.
pub(crate) async fn persist(
    state: &AppState,
    kind: EntityKind,
    id: Option<String>,
    item: Map<String, Value>,
) -> Result<Value, AppError> {
    let storage = mapper::to_storage(kind, Value::Object(item))?;
    let saved = state
        .catalog
        .run(move |c| {
            let store = c.store(kind);
            match id {
                Some(id) => store.update(&id, storage),
                None => store.create(storage),
            }
        })
        .await?;
    Ok(mapper::from_storage(kind, saved))
}

/// POST / PUT for entities with one optional `image` upload.
///
/// The image goes up first; once the metadata write succeeds, the image it
/// replaced is deleted best-effort.
pub(crate) async fn save_with_image(
    state: &AppState,
    kind: EntityKind,
    id: Option<String>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut form = FormData::read(multipart, &[FileField::single(IMAGE_FIELD)]).await?;
    let mut item = schema::coerce_form(kind, &form.fields)?;
    let existing = match &id {
        Some(id) => Some(fetch(state, kind, id).await?),
        None => None,
    };
    let own_id = id.clone().or_else(|| text(&item, "id").map(str::to_string));
    check_name(state, kind, &item, existing.as_ref(), own_id.as_deref()).await?;

    let field = client_image_field(kind);
    let mut replaced = None;
    if let Some(file) = form.take_file(IMAGE_FIELD) {
        let slug = upload_slug(kind, &item, existing.as_ref());
        let key = media::image_key(kind, &slug, media::now_millis(), file.extension())
            .ok_or_else(|| {
                AppError::bad_request(format!("{} does not take an image", kind.label()))
            })?;
        let url = state.media.upload(&key, file).await?;
        replaced = existing
            .as_ref()
            .and_then(|e| text(e, field))
            .map(str::to_string);
        item.insert(field.to_string(), Value::String(url));
    }

    let saved = persist(state, kind, id, item).await?;
    if let Some(old) = replaced {
        if saved.get(field).and_then(Value::as_str) != Some(old.as_str()) {
            state.media.discard(&old).await;
        }
    }
    Ok(Json(saved))
}

/// `id` is the item's own id (path id on update, supplied id on create); a
/// stored item with that id never clashes with itself.
pub(crate) async fn check_name(
    state: &AppState,
    kind: EntityKind,
    item: &Map<String, Value>,
    existing: Option<&Map<String, Value>>,
    id: Option<&str>,
) -> Result<(), AppError> {
    let name = text(item, "name").or_else(|| existing.and_then(|e| text(e, "name")));
    match name {
        Some(name) => {
            ensure_name_available(state, kind, name.to_string(), id.map(str::to_string)).await
        }
        None => Ok(()),
    }
}

/// Client-shape field holding an entity's main image URL.
pub(crate) fn client_image_field(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Section => "imageUrl",
        _ => "image",
    }
}

/// Slug for object keys: request slug, stored slug, then one derived from the
/// name (title for banners).
pub(crate) fn upload_slug(
    kind: EntityKind,
    item: &Map<String, Value>,
    existing: Option<&Map<String, Value>>,
) -> String {
    let label_field = match kind {
        EntityKind::Banner => "title",
        _ => "name",
    };
    let pick = |field: &str| text(item, field).or_else(|| existing.and_then(|e| text(e, field)));
    media::key_slug(pick("slug"), pick(label_field), &kind.label().to_lowercase())
}

pub(crate) fn text<'a>(item: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    item.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
