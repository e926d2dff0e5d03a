//! Subcategory store.
//!
//! Subcategories are stored under their parent at `CATEGORY#<categoryId>` /
//! `SUBCATEGORY#<subcategoryId>`, so the id alone does not address them:
//! `get`, `update` and `delete` scan to find the current key. Changing
//! `categoryId` moves the item (delete old key, then write new key).

use serde_json::Value;

use crate::connection::Connection;
use crate::error::Result;
use crate::keys::{EntityKind, ItemKey, PK_ATTR};

use super::EntityTable;

// ---------------------------------------------------------------------------
// SubcategoryStore
// ---------------------------------------------------------------------------

/// Store for subcategory items.
pub struct SubcategoryStore<'a> {
    table: EntityTable<'a>,
}

impl<'a> SubcategoryStore<'a> {
    /// Create a new `SubcategoryStore` bound to the given connection and table.
    pub fn new(conn: &'a Connection, table: &'a str) -> Self {
        Self {
            table: EntityTable::new(conn, table, EntityKind::Subcategory),
        }
    }

    /// Access the generic table this store wraps.
    pub fn table(&self) -> &EntityTable<'a> {
        &self.table
    }

    pub fn list(&self) -> Result<Vec<Value>> {
        self.table.list()
    }

    pub fn get(&self, id: &str) -> Result<Option<Value>> {
        self.table.get(id)
    }

    pub fn create(&self, item: Value) -> Result<Value> {
        self.table.create(item)
    }

    pub fn update(&self, id: &str, item: Value) -> Result<Value> {
        self.table.update(id, item)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.table.delete(id)
    }

    /// Scan-based duplicate check, usable before a write.
    pub fn ensure_name_available(&self, name: &str, exclude_id: Option<&str>) -> Result<()> {
        self.table.ensure_name_available(name, exclude_id)
    }

    /// Direct lookup at `(CATEGORY#<category_id>, SUBCATEGORY#<id>)`.
    pub fn get_by_key(&self, category_id: &str, id: &str) -> Result<Option<Value>> {
        self.table.get_by_key(&ItemKey::subcategory(category_id, id))
    }

    /// Subcategories whose partition is `CATEGORY#<category_id>`.
    pub fn list_by_category(&self, category_id: &str) -> Result<Vec<Value>> {
        let pk = ItemKey::subcategory(category_id, "").pk;
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| s.get(PK_ATTR).and_then(|v| v.as_str()) == Some(pk.as_str()))
            .collect())
    }
}
