//! Catalog administration core for a furniture storefront.
//!
//! Manages sections, categories, subcategories, products and banners in a
//! single-table, composite-key document store (embedded DuckDB), converts
//! between the client-facing and stored shapes of each entity, and lays out
//! uploaded images in an object store.
//!
//! # Quick start
//!
//! ```no_run
//! use catalog_admin::{mapper, CatalogAdmin, EntityKind};
//! use serde_json::json;
//!
//! let admin = CatalogAdmin::builder().in_memory().build().unwrap();
//!
//! let item = mapper::to_storage(
//!     EntityKind::Category,
//!     json!({ "name": "Office Furniture", "order": 1, "isActive": true }),
//! )
//! .unwrap();
//! let stored = admin.categories().create(item).unwrap();
//! let client = mapper::from_storage(EntityKind::Category, stored);
//! assert_eq!(client["order"], 1);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod keys;
pub mod mapper;
pub mod media;
pub mod models;
#[cfg(feature = "async")]
pub mod objects;
pub mod schema;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogAdmin;
pub use config::TableNames;
pub use connection::Connection;
pub use error::{CatalogError, Result};
pub use keys::{EntityKind, ItemKey};
pub use store::EntityTable;

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// CatalogAdminBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogAdmin`] instance.
///
/// Use [`CatalogAdmin::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogAdminBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct CatalogAdminBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
    tables: Option<TableNames>,
}

impl CatalogAdminBuilder {
    /// Store data in the given DuckDB file.
    ///
    /// If neither this nor [`in_memory`](Self::in_memory) is set, the path
    /// comes from `CATALOG_DB_PATH` or defaults to `catalog.duckdb` in the
    /// platform data directory.
    pub fn database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self.in_memory = false;
        self
    }

    /// Keep all data in memory; nothing survives the process.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self.database_path = None;
        self
    }

    /// Override the table names. Defaults to [`TableNames::from_env`].
    pub fn tables(mut self, tables: TableNames) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Open the database and build the catalog.
    pub fn build(self) -> Result<CatalogAdmin> {
        let conn = if self.in_memory {
            Connection::open_in_memory()?
        } else {
            let path = self
                .database_path
                .unwrap_or_else(config::database_path_from_env);
            Connection::open(path)?
        };

        let tables = self.tables.unwrap_or_else(TableNames::from_env);
        for kind in EntityKind::ALL {
            let name = tables.for_kind(kind);
            if !connection::is_valid_table_name(name) {
                return Err(CatalogError::InvalidArgument(format!(
                    "invalid table name for {}: {:?}",
                    kind, name
                )));
            }
        }

        Ok(CatalogAdmin { conn, tables })
    }
}

// ---------------------------------------------------------------------------
// CatalogAdmin
// ---------------------------------------------------------------------------

/// The main entry point: owns the database connection and hands out
/// lightweight per-entity stores that borrow it.
pub struct CatalogAdmin {
    conn: Connection,
    tables: TableNames,
}

impl CatalogAdmin {
    /// Create a new builder for configuring the catalog.
    pub fn builder() -> CatalogAdminBuilder {
        CatalogAdminBuilder::default()
    }

    // -- Store accessors ---------------------------------------------------

    pub fn sections(&self) -> store::SectionStore<'_> {
        store::SectionStore::new(&self.conn, &self.tables.sections)
    }

    pub fn categories(&self) -> store::CategoryStore<'_> {
        store::CategoryStore::new(&self.conn, &self.tables.categories)
    }

    /// Access the subcategory store.
    ///
    /// Subcategory lookups by id scan the table, since their address embeds
    /// the parent category.
    pub fn subcategories(&self) -> store::SubcategoryStore<'_> {
        store::SubcategoryStore::new(&self.conn, &self.tables.subcategories)
    }

    pub fn products(&self) -> store::ProductStore<'_> {
        store::ProductStore::new(&self.conn, &self.tables.products)
    }

    pub fn banners(&self) -> store::BannerStore<'_> {
        store::BannerStore::new(&self.conn, &self.tables.banners)
    }

    /// The uniform CRUD contract for any entity type.
    pub fn store(&self, kind: EntityKind) -> EntityTable<'_> {
        EntityTable::new(&self.conn, self.tables.for_kind(kind), kind)
    }

    // -- Utility -----------------------------------------------------------

    pub fn table_names(&self) -> &TableNames {
        &self.tables
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl fmt::Display for CatalogAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogAdmin(tables=[{}, {}, {}, {}, {}])",
            self.tables.sections,
            self.tables.categories,
            self.tables.subcategories,
            self.tables.products,
            self.tables.banners
        )
    }
}
