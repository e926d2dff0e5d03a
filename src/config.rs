use std::env;
use std::path::PathBuf;

use crate::keys::EntityKind;

pub const ENV_TABLE_SECTIONS: &str = "CATALOG_TABLE_SECTIONS";
pub const ENV_TABLE_CATEGORIES: &str = "CATALOG_TABLE_CATEGORIES";
pub const ENV_TABLE_SUBCATEGORIES: &str = "CATALOG_TABLE_SUBCATEGORIES";
pub const ENV_TABLE_PRODUCTS: &str = "CATALOG_TABLE_PRODUCTS";
pub const ENV_TABLE_BANNERS: &str = "CATALOG_TABLE_BANNERS";
pub const ENV_DB_PATH: &str = "CATALOG_DB_PATH";

pub const ENV_R2_ENDPOINT: &str = "R2_ENDPOINT";
pub const ENV_R2_BUCKET: &str = "R2_BUCKET_NAME";
pub const ENV_R2_PUBLIC_DOMAIN: &str = "R2_PUBLIC_DOMAIN";
pub const ENV_R2_ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
pub const ENV_R2_SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";
pub const ENV_R2_REGION: &str = "R2_REGION";

pub const ENV_ADMIN_EMAIL: &str = "ADMIN_EMAIL";
pub const ENV_ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";

pub const DEFAULT_DB_FILE: &str = "catalog.duckdb";
pub const DEFAULT_REGION: &str = "auto";

// ---------------------------------------------------------------------------
// TableNames
// ---------------------------------------------------------------------------

/// Physical table name for each entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub sections: String,
    pub categories: String,
    pub subcategories: String,
    pub products: String,
    pub banners: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            sections: "sections".to_string(),
            categories: "categories".to_string(),
            subcategories: "subcategories".to_string(),
            products: "products".to_string(),
            banners: "banners".to_string(),
        }
    }
}

impl TableNames {
    /// Defaults overridden by any `CATALOG_TABLE_*` variables that are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sections: env_or(ENV_TABLE_SECTIONS, defaults.sections),
            categories: env_or(ENV_TABLE_CATEGORIES, defaults.categories),
            subcategories: env_or(ENV_TABLE_SUBCATEGORIES, defaults.subcategories),
            products: env_or(ENV_TABLE_PRODUCTS, defaults.products),
            banners: env_or(ENV_TABLE_BANNERS, defaults.banners),
        }
    }

    pub fn for_kind(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Section => &self.sections,
            EntityKind::Category => &self.categories,
            EntityKind::Subcategory => &self.subcategories,
            EntityKind::Product => &self.products,
            EntityKind::Banner => &self.banners,
        }
    }
}

// ---------------------------------------------------------------------------
// ObjectStorageConfig
// ---------------------------------------------------------------------------

/// Connection settings for an S3-compatible bucket (Cloudflare R2 in production).
#[derive(Debug, Clone)]
pub struct ObjectStorageConfig {
    pub bucket: String,
    /// Custom endpoint; `None` uses the regular AWS endpoint resolution.
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Public base URL objects are served from, without a trailing slash.
    pub public_domain: String,
}

impl ObjectStorageConfig {
    /// Read the `R2_*` variables. Returns `None` unless both the bucket and
    /// the public domain are configured.
    pub fn from_env() -> Option<Self> {
        let bucket = non_empty_env(ENV_R2_BUCKET)?;
        let public_domain = non_empty_env(ENV_R2_PUBLIC_DOMAIN)?;
        Some(Self {
            bucket,
            endpoint: non_empty_env(ENV_R2_ENDPOINT),
            region: env_or(ENV_R2_REGION, DEFAULT_REGION.to_string()),
            access_key_id: non_empty_env(ENV_R2_ACCESS_KEY_ID),
            secret_access_key: non_empty_env(ENV_R2_SECRET_ACCESS_KEY),
            public_domain: public_domain.trim_end_matches('/').to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// AdminCredentials
// ---------------------------------------------------------------------------

/// The single static administrator login.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn from_env() -> Option<Self> {
        Some(Self::new(
            non_empty_env(ENV_ADMIN_EMAIL)?,
            non_empty_env(ENV_ADMIN_PASSWORD)?,
        ))
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.email == username && self.password == password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("catalog-admin")
    } else {
        PathBuf::from(".catalog-admin")
    }
}

/// `CATALOG_DB_PATH` if set, otherwise `catalog.duckdb` in the data directory.
pub fn database_path_from_env() -> PathBuf {
    non_empty_env(ENV_DB_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_data_dir().join(DEFAULT_DB_FILE))
}

fn env_or(name: &str, default: String) -> String {
    non_empty_env(name).unwrap_or(default)
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
