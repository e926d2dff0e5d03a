//! Object storage for uploaded images.
//!
//! [`ObjectStore`] is the put / delete-by-key seam; [`LocalObjectStore`]
//! writes under a directory and, with the `s3` feature, [`S3ObjectStore`]
//! talks to any S3-compatible bucket (Cloudflare R2 in production).
//! [`MediaLibrary`] pairs a store with the public domain objects are served
//! from.

mod local;
#[cfg(feature = "s3")]
mod s3;

pub use local::LocalObjectStore;
#[cfg(feature = "s3")]
pub use s3::S3ObjectStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::media::{self, ImageUpload};

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key`, replacing any existing object.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Remove the object at `key`. Missing objects are not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MediaLibrary
// ---------------------------------------------------------------------------

/// Uploads images and maps keys to public URLs.
#[derive(Clone)]
pub struct MediaLibrary {
    store: Arc<dyn ObjectStore>,
    public_domain: String,
}

impl MediaLibrary {
    pub fn new(store: Arc<dyn ObjectStore>, public_domain: impl Into<String>) -> Self {
        Self {
            store,
            public_domain: public_domain.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn public_domain(&self) -> &str {
        &self.public_domain
    }

    /// Upload an image under `key` and return its public URL.
    pub async fn upload(&self, key: &str, image: ImageUpload) -> Result<String> {
        tracing::info!(key, bytes = image.bytes.len(), "uploading image");
        self.store.put(key, image.bytes, &image.content_type).await?;
        let url = media::public_url(&self.public_domain, key);
        tracing::info!(%url, "upload complete");
        Ok(url)
    }

    /// Delete the object behind a public URL, best-effort.
    ///
    /// URLs outside the public domain are left alone. Failures are logged and
    /// swallowed; the caller's write has already succeeded.
    pub async fn discard(&self, url: &str) {
        let Some(key) = media::key_from_url(&self.public_domain, url) else {
            return;
        };
        tracing::info!(%key, "deleting replaced image");
        if let Err(e) = self.store.delete(&key).await {
            tracing::error!(%key, error = %e, "failed to delete replaced image");
        }
    }
}
