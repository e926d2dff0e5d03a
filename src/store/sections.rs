//! Section store. Sections sit at `SECTION#<id>` / `META`.

use serde_json::Value;

use crate::connection::Connection;
use crate::error::Result;
use crate::keys::EntityKind;

use super::EntityTable;

// ---------------------------------------------------------------------------
// SectionStore
// ---------------------------------------------------------------------------

/// Store for section items.
pub struct SectionStore<'a> {
    table: EntityTable<'a>,
}

impl<'a> SectionStore<'a> {
    /// Create a new `SectionStore` bound to the given connection and table.
    pub fn new(conn: &'a Connection, table: &'a str) -> Self {
        Self {
            table: EntityTable::new(conn, table, EntityKind::Section),
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
}
