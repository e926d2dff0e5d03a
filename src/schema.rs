//! Per-entity form coercion and validation.
//!
//! Multipart forms deliver every field as text. [`coerce_form`] turns those
//! strings into the JSON types each entity expects, and [`validate`] checks a
//! storage-shape item before it is written.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{CatalogError, Result};
use crate::keys::{non_empty_str, EntityKind};
use crate::mapper;
use crate::models::{Banner, BannerPosition, Category, Product, RedirectType, Section, Subcategory};

/// How a text form field is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
    Int,
    Float,
    /// A JSON document; invalid input becomes an empty list.
    Json,
    /// Repeated fields, or a single JSON-encoded array.
    List,
}

/// Coercion rule for `field` of `kind`. Unlisted fields stay text.
pub fn field_kind(kind: EntityKind, field: &str) -> FieldKind {
    match (kind, field) {
        (_, "isActive") => FieldKind::Bool,
        (EntityKind::Product, "rating") => FieldKind::Float,
        (EntityKind::Product, "specs") => FieldKind::Json,
        (EntityKind::Product, "imageUrls") => FieldKind::List,
        (EntityKind::Product, f) if Product::FLAGS.contains(&f) => FieldKind::Bool,
        (EntityKind::Product, _) => FieldKind::Text,
        (_, "order") => FieldKind::Int,
        (EntityKind::Section, "showOnHome") => FieldKind::Bool,
        _ => FieldKind::Text,
    }
}

/// Convert multipart text fields into a client-shape JSON object.
///
/// Empty strings for non-text fields are treated as absent, so an untouched
/// form control never overwrites a stored value with `""`.
pub fn coerce_form(kind: EntityKind, fields: &[(String, String)]) -> Result<Map<String, Value>> {
    let mut out = Map::new();

    for (name, raw) in fields {
        let value = match field_kind(kind, name) {
            FieldKind::List => {
                push_list_value(&mut out, name, raw);
                continue;
            }
            FieldKind::Text => Value::String(raw.clone()),
            _ if raw.trim().is_empty() => continue,
            FieldKind::Bool => Value::Bool(parse_bool(name, raw)?),
            FieldKind::Int => {
                let n: i64 = raw.trim().parse().map_err(|_| {
                    CatalogError::validation(format!("{} must be an integer, got {:?}", name, raw))
                })?;
                Value::from(n)
            }
            FieldKind::Float => {
                let f: f64 = raw.trim().parse().map_err(|_| {
                    CatalogError::validation(format!("{} must be a number, got {:?}", name, raw))
                })?;
                serde_json::Number::from_f64(f).map(Value::Number).ok_or_else(|| {
                    CatalogError::validation(format!("{} must be a finite number", name))
                })?
            }
            FieldKind::Json => match serde_json::from_str::<Value>(raw) {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!(field = %name, error = %e, "unparseable JSON field, using []");
                    Value::Array(Vec::new())
                }
            },
        };
        out.insert(name.clone(), value);
    }

    Ok(out)
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim() {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        other => Err(CatalogError::validation(format!(
            "{} must be true or false, got {:?}",
            name, other
        ))),
    }
}

fn push_list_value(out: &mut Map<String, Value>, name: &str, raw: &str) {
    let trimmed = raw.trim();
    let items: Vec<Value> = if trimmed.is_empty() {
        Vec::new()
    } else if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<Value>>(trimmed) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(field = %name, error = %e, "unparseable JSON list field, using []");
                Vec::new()
            }
        }
    } else {
        vec![Value::String(raw.to_string())]
    };

    match out.get_mut(name) {
        Some(Value::Array(existing)) => existing.extend(items),
        _ => {
            out.insert(name.to_string(), Value::Array(items));
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check a storage-shape item before it is written.
pub fn validate(kind: EntityKind, item: &Map<String, Value>) -> Result<()> {
    match kind {
        EntityKind::Section | EntityKind::Category | EntityKind::Product => {
            require(kind, item, "name")?;
        }
        EntityKind::Subcategory => {
            require(kind, item, "name")?;
            require(kind, item, "categoryId")?;
        }
        EntityKind::Banner => require(kind, item, "title")?,
    }

    let client = mapper::from_storage(kind, Value::Object(item.clone()));
    match kind {
        EntityKind::Section => typed::<Section>(kind, client).map(|_| ()),
        EntityKind::Category => typed::<Category>(kind, client).map(|_| ()),
        EntityKind::Subcategory => typed::<Subcategory>(kind, client).map(|_| ()),
        EntityKind::Product => typed::<Product>(kind, client).map(|_| ()),
        EntityKind::Banner => validate_banner(typed::<Banner>(kind, client)?),
    }
}

fn validate_banner(banner: Banner) -> Result<()> {
    let has = |v: &Option<String>| v.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false);

    if banner.position == Some(BannerPosition::CategoryTop) && !has(&banner.category_id) {
        return Err(CatalogError::validation(
            "categoryId is required for CATEGORY_TOP banners",
        ));
    }
    match banner.redirect_type.unwrap_or_default() {
        RedirectType::None => Ok(()),
        RedirectType::Category | RedirectType::Product if !has(&banner.redirect_value) => Err(
            CatalogError::validation("redirectValue is required when redirectType is not NONE"),
        ),
        _ => Ok(()),
    }
}

fn require(kind: EntityKind, item: &Map<String, Value>, field: &str) -> Result<()> {
    non_empty_str(item, field).map(|_| ()).ok_or_else(|| {
        CatalogError::validation(format!("{} {} is required", kind.label(), field))
    })
}

fn typed<T: DeserializeOwned>(kind: EntityKind, client: Value) -> Result<T> {
    serde_json::from_value(client).map_err(|e| {
        CatalogError::validation(format!("invalid {}: {}", kind.label().to_lowercase(), e))
    })
}
