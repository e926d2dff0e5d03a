//! Catalog stores: CRUD over the composite-key document tables.
//!
//! [`EntityTable`] implements the contract shared by every entity type (list,
//! get, create, update, delete) including key derivation, timestamps, slug
//! defaults, name uniqueness and the subcategory re-parent cascade. The
//! per-entity stores wrap it and add lookups specific to their entity.
//!
//! Nothing here is transactional: uniqueness is checked by a scan before the
//! write, and a re-parent deletes the old item before writing the new one.

pub mod banners;
pub mod categories;
pub mod products;
pub mod sections;
pub mod subcategories;

pub use banners::BannerStore;
pub use categories::CategoryStore;
pub use products::ProductStore;
pub use sections::SectionStore;
pub use subcategories::SubcategoryStore;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::connection::Connection;
use crate::error::{CatalogError, Result};
use crate::keys::{non_empty_str, EntityKind, ItemKey, PK_ATTR, SK_ATTR};
use crate::mapper::json_type_name;
use crate::schema;

pub const CREATED_AT: &str = "createdAt";
pub const UPDATED_AT: &str = "updatedAt";

// ---------------------------------------------------------------------------
// EntityTable
// ---------------------------------------------------------------------------

/// Uniform CRUD over one entity type's table. Items in and out are in
/// storage shape (see [`crate::mapper`]).
pub struct EntityTable<'a> {
    conn: &'a Connection,
    table: &'a str,
    kind: EntityKind,
}

impl<'a> EntityTable<'a> {
    pub fn new(conn: &'a Connection, table: &'a str, kind: EntityKind) -> Self {
        Self { conn, table, kind }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn table_name(&self) -> &str {
        self.table
    }

    /// Every stored item, in no particular order.
    pub fn list(&self) -> Result<Vec<Value>> {
        self.conn.scan(self.table)
    }

    /// Look up an item by id. Absent is `Ok(None)`.
    pub fn get(&self, id: &str) -> Result<Option<Value>> {
        Ok(self.locate(id)?.map(|(_, item)| item))
    }

    /// Direct `(pk, sk)` lookup.
    pub fn get_by_key(&self, key: &ItemKey) -> Result<Option<Value>> {
        self.conn.get_item(self.table, key)
    }

    /// Persist a new item.
    ///
    /// Assigns a fresh id when none is supplied, fills the slug, stamps
    /// `createdAt` / `updatedAt`, validates, and rejects duplicate names for
    /// categories and subcategories.
    ///
    /// A supplied id that is already stored is overwritten: the item's own
    /// name does not count as a clash, and a subcategory stored under another
    /// category is removed from its old address.
    pub fn create(&self, item: Value) -> Result<Value> {
        let mut map = self.object(item)?;
        let now = now_timestamp();

        let (id, previous) = match non_empty_str(&map, self.kind.id_field()) {
            Some(id) => {
                let id = id.to_string();
                let previous = self.locate(&id)?.map(|(key, _)| key);
                (id, previous)
            }
            None => (new_id(), None),
        };
        map.remove("id");
        map.insert(self.kind.id_field().to_string(), Value::String(id.clone()));
        map.insert(CREATED_AT.to_string(), Value::String(now.clone()));
        map.insert(UPDATED_AT.to_string(), Value::String(now));
        fill_defaults(self.kind, &mut map);

        schema::validate(self.kind, &map)?;
        if let Some(name) = non_empty_str(&map, "name") {
            self.ensure_name_available(name, Some(&id))?;
        }

        let key = self.kind.key_for(&map)?;
        key.stamp(&mut map);
        let item = Value::Object(map);

        if let Some(old_key) = previous.filter(|old| *old != key) {
            tracing::info!(kind = %self.kind, id = %id, from = %old_key, to = %key, "moving item");
            self.conn.delete_item(self.table, &old_key)?;
        }
        tracing::info!(kind = %self.kind, id = %id, key = %key, "saving item");
        self.conn.put_item(self.table, &item)?;
        Ok(item)
    }

    /// Overwrite an existing item with the request merged over it.
    ///
    /// Fields missing from `item` keep their stored values, `createdAt` is
    /// preserved and `updatedAt` refreshed. If the derived address changes
    /// (a subcategory moved to another category) the old item is deleted
    /// before the new one is written. Callers sharing the connection through
    /// `AsyncCatalogAdmin` hold its lock across both steps; only a
    /// reader in another process can observe the gap.
    pub fn update(&self, id: &str, item: Value) -> Result<Value> {
        let incoming = self.object(item)?;
        let (old_key, existing) = self.locate(id)?.ok_or_else(|| {
            CatalogError::NotFound(format!("{} {} not found", self.kind.label(), id))
        })?;

        let mut merged = match existing {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (field, value) in incoming {
            if is_reserved(self.kind, &field) {
                continue;
            }
            merged.insert(field, value);
        }

        let now = now_timestamp();
        if non_empty_str(&merged, CREATED_AT).is_none() {
            merged.insert(CREATED_AT.to_string(), Value::String(now.clone()));
        }
        merged.insert(UPDATED_AT.to_string(), Value::String(now));
        merged.insert(self.kind.id_field().to_string(), Value::String(id.to_string()));
        fill_defaults(self.kind, &mut merged);

        schema::validate(self.kind, &merged)?;
        if let Some(name) = non_empty_str(&merged, "name") {
            self.ensure_name_available(name, Some(id))?;
        }

        let new_key = self.kind.key_for(&merged)?;
        new_key.stamp(&mut merged);
        let item = Value::Object(merged);

        if new_key != old_key {
            tracing::info!(kind = %self.kind, id, from = %old_key, to = %new_key, "moving item");
            self.conn.delete_item(self.table, &old_key)?;
        }
        tracing::info!(kind = %self.kind, id, key = %new_key, "updating item");
        self.conn.put_item(self.table, &item)?;
        Ok(item)
    }

    /// Remove an item. Returns `false` when nothing was stored under `id`.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let key = match self.kind {
            EntityKind::Subcategory => match self.locate(id)? {
                Some((key, _)) => key,
                None => return Ok(false),
            },
            kind => ItemKey::meta(kind, id),
        };
        let deleted = self.conn.delete_item(self.table, &key)?;
        tracing::info!(kind = %self.kind, id, deleted, "deleted item");
        Ok(deleted)
    }

    /// Fail with a validation error if another item of a uniquely named kind
    /// already uses `name` (case-insensitive). `exclude_id` skips the item
    /// being updated. Always succeeds for other kinds.
    pub fn ensure_name_available(&self, name: &str, exclude_id: Option<&str>) -> Result<()> {
        if !self.kind.has_unique_names() {
            return Ok(());
        }
        let wanted = name.to_lowercase();
        let id_field = self.kind.id_field();
        let clash = self.list()?.into_iter().any(|item| {
            let same_name = item
                .get("name")
                .and_then(|v| v.as_str())
                .map(|n| n.to_lowercase() == wanted)
                .unwrap_or(false);
            let is_self = exclude_id.is_some()
                && item.get(id_field).and_then(|v| v.as_str()) == exclude_id;
            same_name && !is_self
        });

        if clash {
            Err(CatalogError::validation(format!(
                "{} with this name already exists",
                self.kind.label()
            )))
        } else {
            Ok(())
        }
    }

    /// Resolve an id to its current address and stored item.
    ///
    /// Subcategory addresses depend on the parent category, so they are found
    /// by scanning; every other kind is a point lookup.
    fn locate(&self, id: &str) -> Result<Option<(ItemKey, Value)>> {
        match self.kind {
            EntityKind::Subcategory => {
                let id_field = self.kind.id_field();
                let found = self.list()?.into_iter().find(|item| {
                    item.get(id_field).and_then(|v| v.as_str()) == Some(id)
                        || item.get("id").and_then(|v| v.as_str()) == Some(id)
                });
                Ok(found.and_then(|item| ItemKey::of_item(&item).map(|key| (key, item))))
            }
            kind => {
                let key = ItemKey::meta(kind, id);
                Ok(self.conn.get_item(self.table, &key)?.map(|item| (key, item)))
            }
        }
    }

    fn object(&self, item: Value) -> Result<Map<String, Value>> {
        match item {
            Value::Object(map) => Ok(map),
            other => Err(CatalogError::InvalidArgument(format!(
                "{} must be a JSON object, got {}",
                self.kind.label(),
                json_type_name(&other)
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lowercase, collapse every run of characters outside `[a-z0-9]` into `-`,
/// and trim leading/trailing dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Current UTC time as RFC 3339 with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fields a request may not overwrite on update.
fn is_reserved(kind: EntityKind, field: &str) -> bool {
    field == "id"
        || field == kind.id_field()
        || field == PK_ATTR
        || field == SK_ATTR
        || field == CREATED_AT
        || field == UPDATED_AT
}

fn fill_defaults(kind: EntityKind, map: &mut Map<String, Value>) {
    if non_empty_str(map, "slug").is_none() {
        let source = match kind {
            EntityKind::Banner => non_empty_str(map, "title"),
            _ => non_empty_str(map, "name"),
        };
        if let Some(slug) = source.map(slugify).filter(|s| !s.is_empty()) {
            map.insert("slug".to_string(), Value::String(slug));
        }
    }

    if kind == EntityKind::Product {
        if !map.get("images").map(Value::is_array).unwrap_or(false) {
            map.insert("images".to_string(), Value::Array(Vec::new()));
        }
        if !map.get("specs").map(Value::is_object).unwrap_or(false) {
            map.insert("specs".to_string(), Value::Object(Map::new()));
        }
    }
}
