//! Category store. Names are unique across all categories, ignoring case.

use serde_json::Value;

use crate::connection::Connection;
use crate::error::Result;
use crate::keys::EntityKind;

use super::EntityTable;

// ---------------------------------------------------------------------------
// CategoryStore
// ---------------------------------------------------------------------------

/// Store for category items.
pub struct CategoryStore<'a> {
    table: EntityTable<'a>,
}

impl<'a> CategoryStore<'a> {
    /// Create a new `CategoryStore` bound to the given connection and table.
    pub fn new(conn: &'a Connection, table: &'a str) -> Self {
        Self {
            table: EntityTable::new(conn, table, EntityKind::Category),
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

    /// Scan-based duplicate check, usable before uploading an image.
    pub fn ensure_name_available(&self, name: &str, exclude_id: Option<&str>) -> Result<()> {
        self.table.ensure_name_available(name, exclude_id)
    }

    /// Categories assigned to a section.
    pub fn list_by_section(&self, section_id: &str) -> Result<Vec<Value>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|c| c.get("sectionId").and_then(|v| v.as_str()) == Some(section_id))
            .collect())
    }
}
