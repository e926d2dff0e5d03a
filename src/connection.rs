//! DuckDB-backed key-value document store.
//!
//! Each logical table holds `(pk, sk, item)` rows with `(pk, sk)` as primary
//! key; `item` is the JSON text of the full stored document, including its
//! own `PK` / `SK` attributes. Tables are created lazily on first access.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use duckdb::{params, Connection as DuckDbConnection};
use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::keys::ItemKey;

/// Wraps a DuckDB connection and exposes the `{get, put, delete, scan}`
/// contract over composite-key tables.
pub struct Connection {
    conn: DuckDbConnection,
    registered_tables: RefCell<HashSet<String>>,
}

impl Connection {
    /// Open a transient in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self::wrap(conn))
    }

    /// Open (or create) a database file, creating parent directories as needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = DuckDbConnection::open(path)?;
        tracing::debug!(path = %path.display(), "opened catalog database");
        Ok(Self::wrap(conn))
    }

    fn wrap(conn: DuckDbConnection) -> Self {
        Self {
            conn,
            registered_tables: RefCell::new(HashSet::new()),
        }
    }

    /// Ensure one or more tables exist.
    pub fn ensure_tables(&self, tables: &[&str]) -> Result<()> {
        for name in tables {
            if !self.registered_tables.borrow().contains(*name) {
                self.ensure_table(name)?;
            }
        }
        Ok(())
    }

    /// Full scan of a table. Row order is unspecified.
    pub fn scan(&self, table: &str) -> Result<Vec<Value>> {
        self.ensure_tables(&[table])?;
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT item FROM \"{}\"", table))?;
        let mut rows = stmt.query([])?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let text: String = row.get(0)?;
            out.push(serde_json::from_str(&text)?);
        }
        Ok(out)
    }

    /// Point lookup by `(pk, sk)`. Returns `None` when absent.
    pub fn get_item(&self, table: &str, key: &ItemKey) -> Result<Option<Value>> {
        self.ensure_tables(&[table])?;
        let mut stmt = self.conn.prepare(&format!(
            "SELECT item FROM \"{}\" WHERE pk = ? AND sk = ?",
            table
        ))?;
        let mut rows = stmt.query(params![key.pk, key.sk])?;

        match rows.next()? {
            Some(row) => {
                let text: String = row.get(0)?;
                Ok(Some(serde_json::from_str(&text)?))
            }
            None => Ok(None),
        }
    }

    /// Write an item at the address in its own `PK` / `SK` attributes,
    /// replacing whatever was stored there.
    pub fn put_item(&self, table: &str, item: &Value) -> Result<()> {
        self.ensure_tables(&[table])?;
        let key = ItemKey::of_item(item).ok_or_else(|| {
            CatalogError::InvalidArgument(format!(
                "item written to {} has no PK/SK attributes",
                table
            ))
        })?;
        let text = serde_json::to_string(item)?;
        self.conn.execute(
            &format!(
                "INSERT OR REPLACE INTO \"{}\" (pk, sk, item) VALUES (?, ?, ?)",
                table
            ),
            params![key.pk, key.sk, text],
        )?;
        Ok(())
    }

    /// Remove the item at `(pk, sk)`. Returns whether a row was deleted.
    pub fn delete_item(&self, table: &str, key: &ItemKey) -> Result<bool> {
        self.ensure_tables(&[table])?;
        let deleted = self.conn.execute(
            &format!("DELETE FROM \"{}\" WHERE pk = ? AND sk = ?", table),
            params![key.pk, key.sk],
        )?;
        Ok(deleted > 0)
    }

    /// Check whether a table has been created through this connection.
    pub fn has_table(&self, name: &str) -> bool {
        self.registered_tables.borrow().contains(name)
    }

    /// Return a list of all tables created through this connection.
    pub fn tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registered_tables.borrow().iter().cloned().collect();
        names.sort();
        names
    }

    fn ensure_table(&self, name: &str) -> Result<()> {
        if !is_valid_table_name(name) {
            return Err(CatalogError::InvalidArgument(format!(
                "invalid table name: {:?}",
                name
            )));
        }
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (\
               pk VARCHAR NOT NULL, \
               sk VARCHAR NOT NULL, \
               item VARCHAR NOT NULL, \
               PRIMARY KEY (pk, sk))",
            name
        ))?;
        self.registered_tables.borrow_mut().insert(name.to_string());
        tracing::debug!(table = name, "registered table");
        Ok(())
    }
}

/// Table names are interpolated into SQL, so only a conservative character
/// set is accepted.
pub fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 128
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
