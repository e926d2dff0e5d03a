use catalog_admin::config::AdminCredentials;
use catalog_admin::objects::MediaLibrary;
use catalog_admin::AsyncCatalogAdmin;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Catalog stores. Dispatches the blocking DuckDB work to a thread pool.
    pub catalog: AsyncCatalogAdmin,

    /// Where uploaded images go (R2 or a local directory).
    pub media: MediaLibrary,

    /// The static admin login; `None` rejects every login attempt.
    pub credentials: Option<AdminCredentials>,
}
