//! Local object store, media library and the async catalog wrapper.

#![cfg(feature = "async")]

use std::sync::Arc;

use catalog_admin::media::ImageUpload;
use catalog_admin::objects::{LocalObjectStore, MediaLibrary, ObjectStore};
use catalog_admin::{mapper, AsyncCatalogAdmin, CatalogError, EntityKind};
use serde_json::json;

const DOMAIN: &str = "https://media.test";

// ---------------------------------------------------------------------------
// LocalObjectStore
// ---------------------------------------------------------------------------

#[tokio::test]
async fn local_store_put_and_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalObjectStore::new(dir.path());

    store
        .put("products/desk-1.png", b"png bytes".to_vec(), "image/png")
        .await
        .unwrap();
    let path = dir.path().join("products/desk-1.png");
    assert_eq!(std::fs::read(&path).unwrap(), b"png bytes");

    store.delete("products/desk-1.png").await.unwrap();
    assert!(!path.exists());
    // Deleting a missing object is fine.
    store.delete("products/desk-1.png").await.unwrap();
}

#[tokio::test]
async fn local_store_rejects_escaping_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalObjectStore::new(dir.path());
    for key in ["../outside.jpg", "/etc/passwd", ""] {
        let err = store.put(key, vec![1], "image/jpeg").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)), "{key}");
    }
}

// ---------------------------------------------------------------------------
// MediaLibrary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_returns_public_url_and_discard_deletes() {
    let dir = tempfile::tempdir().unwrap();
    let media = MediaLibrary::new(Arc::new(LocalObjectStore::new(dir.path())), format!("{DOMAIN}/"));
    assert_eq!(media.public_domain(), DOMAIN);

    let url = media
        .upload("banners/sale-1.jpg", ImageUpload::new("image/jpeg", vec![7, 7]))
        .await
        .unwrap();
    assert_eq!(url, "https://media.test/banners/sale-1.jpg");
    let path = dir.path().join("banners/sale-1.jpg");
    assert!(path.exists());

    media.discard(&url).await;
    assert!(!path.exists());
}

#[tokio::test]
async fn discard_ignores_foreign_urls() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalObjectStore::new(dir.path());
    store.put("keep.jpg", vec![1], "image/jpeg").await.unwrap();
    let media = MediaLibrary::new(Arc::new(store), DOMAIN);

    media.discard("https://elsewhere.test/keep.jpg").await;
    assert!(dir.path().join("keep.jpg").exists());
}

// ---------------------------------------------------------------------------
// AsyncCatalogAdmin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn async_catalog_runs_store_operations() {
    let catalog = AsyncCatalogAdmin::builder().in_memory().build().await.unwrap();

    let item = mapper::to_storage(EntityKind::Category, json!({ "id": "c1", "name": "Rugs" })).unwrap();
    catalog.run(move |c| c.categories().create(item)).await.unwrap();

    let handle = catalog.clone();
    let listed = handle.run(|c| c.categories().list()).await.unwrap();
    assert_eq!(listed.len(), 1);

    let err = catalog
        .run(|c| c.categories().update("missing", json!({ "name": "x" })))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}
