//! Object-key layout and public URLs for uploaded catalog images.
//!
//! Keys look like `{folder}/{slug}-{timestamp}.{ext}`; product thumbnails
//! use `products/{slug}-thumb-{timestamp}.{ext}` and gallery images add a
//! random suffix so several uploads in the same millisecond never collide.

use rand::Rng;

use crate::keys::EntityKind;
use crate::store::slugify;

pub const DEFAULT_EXTENSION: &str = "jpg";
pub const PRODUCT_FOLDER: &str = "products";

/// An image file received from a client, held in memory.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn extension(&self) -> &'static str {
        extension_for(&self.content_type)
    }
}

/// File extension for a MIME type, falling back to `jpg`.
pub fn extension_for(mime: &str) -> &'static str {
    let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    match essence.as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        _ => DEFAULT_EXTENSION,
    }
}

/// Slug used in object keys: the explicit slug if non-empty, otherwise one
/// derived from `name`, otherwise `fallback`.
pub fn key_slug(slug: Option<&str>, name: Option<&str>, fallback: &str) -> String {
    if let Some(s) = slug.filter(|s| !s.trim().is_empty()) {
        return s.to_string();
    }
    match name.map(slugify).filter(|s| !s.is_empty()) {
        Some(s) => s,
        None => fallback.to_string(),
    }
}

/// `{folder}/{slug}-{timestamp}.{ext}` for an entity's main image.
///
/// Returns `None` for entities without images.
pub fn image_key(kind: EntityKind, slug: &str, timestamp_ms: i64, ext: &str) -> Option<String> {
    kind.image_folder()
        .map(|folder| format!("{}/{}-{}.{}", folder, slug, timestamp_ms, ext))
}

pub fn thumbnail_key(slug: &str, timestamp_ms: i64, ext: &str) -> String {
    format!("{}/{}-thumb-{}.{}", PRODUCT_FOLDER, slug, timestamp_ms, ext)
}

pub fn gallery_key(slug: &str, timestamp_ms: i64, nonce: u32, ext: &str) -> String {
    format!("{}/{}-{}-{}.{}", PRODUCT_FOLDER, slug, timestamp_ms, nonce, ext)
}

/// Random suffix for gallery keys.
pub fn random_nonce() -> u32 {
    rand::thread_rng().gen_range(0..1_000_000_000)
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `{domain}/{key}`.
pub fn public_url(domain: &str, key: &str) -> String {
    format!("{}/{}", domain.trim_end_matches('/'), key.trim_start_matches('/'))
}

/// Recover the object key from a public URL. Only URLs under `domain` are
/// ours; anything else yields `None`.
pub fn key_from_url(domain: &str, url: &str) -> Option<String> {
    let prefix = format!("{}/", domain.trim_end_matches('/'));
    url.strip_prefix(&prefix)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}
