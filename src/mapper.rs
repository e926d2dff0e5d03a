//! Client shape ↔ storage shape transforms.
//!
//! The client sees `id`, `imageUrl` (sections), `thumbnailUrl` / `imageUrls`
//! and a `specs` list of `{key, value}` pairs (products). Storage uses the
//! entity's identity attribute (`categoryId`, ...), `image`, `thumbnailImg`,
//! `images`, and a `specs` key → value mapping.
//!
//! `from_storage(to_storage(x))` gives back every field of `x`, except that
//! product specs collapse duplicate keys (last wins), drop empty keys, and come
//! back in mapping order.

use serde_json::{Map, Value};

use crate::error::{CatalogError, Result};
use crate::keys::{EntityKind, PK_ATTR, SK_ATTR};

/// Convert a client-shape item into storage shape.
pub fn to_storage(kind: EntityKind, item: Value) -> Result<Value> {
    let mut map = into_object(kind, item)?;

    if let Some(id) = map.remove("id") {
        if !id.is_null() {
            map.insert(kind.id_field().to_string(), id);
        }
    }

    match kind {
        EntityKind::Section => rename(&mut map, "imageUrl", "image"),
        EntityKind::Product => {
            rename(&mut map, "thumbnailUrl", "thumbnailImg");
            rename(&mut map, "imageUrls", "images");
            if let Some(specs) = map.remove("specs") {
                map.insert("specs".to_string(), specs_to_map(specs));
            }
        }
        EntityKind::Category | EntityKind::Subcategory | EntityKind::Banner => {}
    }

    Ok(Value::Object(map))
}

/// Convert a stored item back into client shape.
///
/// The `PK` / `SK` address attributes are internal and are not returned.
pub fn from_storage(kind: EntityKind, item: Value) -> Value {
    let mut map = match item {
        Value::Object(map) => map,
        other => return other,
    };

    map.remove(PK_ATTR);
    map.remove(SK_ATTR);
    if let Some(id) = map.remove(kind.id_field()) {
        map.insert("id".to_string(), id);
    }

    match kind {
        EntityKind::Section => rename(&mut map, "image", "imageUrl"),
        EntityKind::Product => {
            rename(&mut map, "thumbnailImg", "thumbnailUrl");
            let images = map.remove("images").filter(|v| !v.is_null());
            map.insert(
                "imageUrls".to_string(),
                images.unwrap_or_else(|| Value::Array(Vec::new())),
            );
            let specs = map.remove("specs").map(specs_to_list).unwrap_or_default();
            map.insert("specs".to_string(), Value::Array(specs));
        }
        EntityKind::Banner => {
            let image = map.remove("image").filter(|v| !v.is_null());
            map.insert(
                "image".to_string(),
                image.unwrap_or_else(|| Value::String(String::new())),
            );
        }
        EntityKind::Category | EntityKind::Subcategory => {}
    }

    Value::Object(map)
}

/// Collapse a `[{key, value}, ...]` list into a mapping. Later entries win
/// over earlier ones with the same key; entries with an empty key are dropped.
/// A value that is already a mapping is passed through.
pub fn specs_to_map(specs: Value) -> Value {
    match specs {
        Value::Array(entries) => {
            let mut out = Map::new();
            for entry in entries {
                let key = entry.get("key").and_then(|k| k.as_str()).unwrap_or("");
                if key.is_empty() {
                    continue;
                }
                let value = entry.get("value").cloned().unwrap_or(Value::Null);
                out.insert(key.to_string(), value);
            }
            Value::Object(out)
        }
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    }
}

/// Expand a specs mapping into a `[{key, value}, ...]` list in mapping order.
pub fn specs_to_list(specs: Value) -> Vec<Value> {
    match specs {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| {
                let mut entry = Map::new();
                entry.insert("key".to_string(), Value::String(key));
                entry.insert("value".to_string(), value);
                Value::Object(entry)
            })
            .collect(),
        Value::Array(entries) => entries,
        _ => Vec::new(),
    }
}

fn rename(map: &mut Map<String, Value>, from: &str, to: &str) {
    if let Some(v) = map.remove(from) {
        map.insert(to.to_string(), v);
    }
}

fn into_object(kind: EntityKind, item: Value) -> Result<Map<String, Value>> {
    match item {
        Value::Object(map) => Ok(map),
        other => Err(CatalogError::InvalidArgument(format!(
            "{} must be a JSON object, got {}",
            kind.label(),
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
