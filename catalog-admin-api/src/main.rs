use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use catalog_admin::config::{self, AdminCredentials, ObjectStorageConfig};
use catalog_admin::objects::{LocalObjectStore, MediaLibrary, S3ObjectStore};
use catalog_admin::AsyncCatalogAdmin;
use catalog_admin_api::{
    AppState, DEFAULT_PORT, ENV_MEDIA_DIR, ENV_PORT, ENV_PUBLIC_URL, MEDIA_ROUTE,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("catalog_admin=info,catalog_admin_api=info,tower_http=info")
            }),
        )
        .init();

    let port = match env::var(ENV_PORT) {
        Ok(raw) => raw.parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };

    info!("Opening catalog...");
    let catalog = AsyncCatalogAdmin::builder().build().await?;

    let (media, local_media_dir) = match ObjectStorageConfig::from_env() {
        Some(storage) => {
            let store = S3ObjectStore::connect(&storage).await;
            (
                MediaLibrary::new(Arc::new(store), storage.public_domain.clone()),
                None,
            )
        }
        None => {
            let dir = env::var(ENV_MEDIA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| config::default_data_dir().join("media"));
            let base = env::var(ENV_PUBLIC_URL)
                .unwrap_or_else(|_| format!("http://localhost:{port}"));
            let domain = format!("{}{}", base.trim_end_matches('/'), MEDIA_ROUTE);
            warn!(
                dir = %dir.display(),
                "object storage not configured, keeping images on local disk"
            );
            (
                MediaLibrary::new(Arc::new(LocalObjectStore::new(&dir)), domain),
                Some(dir),
            )
        }
    };

    let credentials = AdminCredentials::from_env();
    if credentials.is_none() {
        warn!("ADMIN_EMAIL / ADMIN_PASSWORD not set, every login will be rejected");
    }

    let state = Arc::new(AppState {
        catalog,
        media,
        credentials,
    });

    let mut app = catalog_admin_api::router(state);
    if let Some(dir) = &local_media_dir {
        app = catalog_admin_api::serve_media(app, dir);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
