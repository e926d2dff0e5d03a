//! Shared test harness: a server on an ephemeral port backed by an in-memory
//! catalog and a temporary media directory.

use std::path::PathBuf;
use std::sync::Arc;

use catalog_admin::config::AdminCredentials;
use catalog_admin::objects::{LocalObjectStore, MediaLibrary};
use catalog_admin::AsyncCatalogAdmin;
use catalog_admin_api::AppState;
use tempfile::TempDir;

pub const MEDIA_DOMAIN: &str = "https://media.test";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "hunter2";

pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
    pub media_dir: TempDir,
}

impl TestServer {
    pub async fn start() -> Self {
        let media_dir = tempfile::tempdir().expect("tempdir");
        let catalog = AsyncCatalogAdmin::builder()
            .in_memory()
            .build()
            .await
            .expect("catalog");
        let store = LocalObjectStore::new(media_dir.path());
        let state = Arc::new(AppState {
            catalog,
            media: MediaLibrary::new(Arc::new(store), MEDIA_DOMAIN),
            credentials: Some(AdminCredentials::new(ADMIN_EMAIL, ADMIN_PASSWORD)),
        });

        let app = catalog_admin_api::router(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server");
        });

        Self {
            base: format!("http://{addr}"),
            client: reqwest::Client::new(),
            media_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Filesystem path of an object uploaded under `url`.
    pub fn media_path(&self, url: &str) -> PathBuf {
        let key = url
            .strip_prefix(&format!("{MEDIA_DOMAIN}/"))
            .expect("url under media domain");
        self.media_dir.path().join(key)
    }
}

pub fn png_part(bytes: &[u8]) -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(bytes.to_vec())
        .file_name("photo.png")
        .mime_str("image/png")
        .expect("mime")
}
