//! Product store. Specs are stored as a key -> value mapping.

use serde_json::Value;

use crate::connection::Connection;
use crate::error::Result;
use crate::keys::EntityKind;

use super::EntityTable;

// ---------------------------------------------------------------------------
// ProductStore
// ---------------------------------------------------------------------------

/// Store for product items.
pub struct ProductStore<'a> {
    table: EntityTable<'a>,
}

impl<'a> ProductStore<'a> {
    /// Create a new `ProductStore` bound to the given connection and table.
    pub fn new(conn: &'a Connection, table: &'a str) -> Self {
        Self {
            table: EntityTable::new(conn, table, EntityKind::Product),
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

    /// Products filed under a category.
    pub fn list_by_category(&self, category_id: &str) -> Result<Vec<Value>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|p| p.get("categoryId").and_then(|v| v.as_str()) == Some(category_id))
            .collect())
    }
}
