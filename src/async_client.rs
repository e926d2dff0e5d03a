//! Async wrapper around [`CatalogAdmin`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all catalog operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```ignore
//! use catalog_admin::AsyncCatalogAdmin;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = AsyncCatalogAdmin::builder().in_memory().build().await.unwrap();
//!     let categories = catalog.run(|c| c.categories().list()).await.unwrap();
//!     println!("{} categories", categories.len());
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::TableNames;
use crate::error::{CatalogError, Result};
use crate::CatalogAdmin;

// ---------------------------------------------------------------------------
// AsyncCatalogAdminBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCatalogAdmin`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncCatalogAdminBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
    tables: Option<TableNames>,
}

impl AsyncCatalogAdminBuilder {
    pub fn database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self.in_memory = false;
        self
    }

    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self.database_path = None;
        self
    }

    pub fn tables(mut self, tables: TableNames) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Build the async catalog. Opening the database runs on the blocking
    /// thread pool.
    pub async fn build(self) -> Result<AsyncCatalogAdmin> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CatalogAdmin::builder();
            if self.in_memory {
                builder = builder.in_memory();
            } else if let Some(path) = self.database_path {
                builder = builder.database_path(path);
            }
            if let Some(tables) = self.tables {
                builder = builder.tables(tables);
            }
            Ok(AsyncCatalogAdmin::from_catalog(builder.build()?))
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalogAdmin
// ---------------------------------------------------------------------------

/// Async wrapper around [`CatalogAdmin`].
///
/// The catalog is protected by a [`Mutex`] since its connection uses
/// `RefCell` internally; every operation holds the lock for its duration.
#[derive(Clone)]
pub struct AsyncCatalogAdmin {
    inner: Arc<Mutex<CatalogAdmin>>,
}

impl AsyncCatalogAdmin {
    pub fn builder() -> AsyncCatalogAdminBuilder {
        AsyncCatalogAdminBuilder::default()
    }

    /// Wrap an already-built catalog.
    pub fn from_catalog(catalog: CatalogAdmin) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run a sync catalog operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use catalog_admin::AsyncCatalogAdmin;
    /// # async fn example() -> catalog_admin::Result<()> {
    /// # let catalog = AsyncCatalogAdmin::builder().in_memory().build().await?;
    /// let products = catalog.run(|c| c.products().list()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogAdmin) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = catalog
                .lock()
                .map_err(|_| CatalogError::InvalidArgument("catalog lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
