//! Entity kinds and composite (partition key, sort key) derivation.
//!
//! Every stored item carries its own address in the `PK` / `SK` attributes.
//! Sections, categories, products and banners live at `<ENTITY>#<id>` / `META`;
//! subcategories are nested under their parent category at
//! `CATEGORY#<categoryId>` / `SUBCATEGORY#<subcategoryId>`.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{CatalogError, Result};

/// Attribute holding the partition key on every stored item.
pub const PK_ATTR: &str = "PK";
/// Attribute holding the sort key on every stored item.
pub const SK_ATTR: &str = "SK";
/// Sort key used by every single-item entity.
pub const META_SORT_KEY: &str = "META";

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The five independently stored catalog entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Section,
    Category,
    Subcategory,
    Product,
    Banner,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Section,
        EntityKind::Category,
        EntityKind::Subcategory,
        EntityKind::Product,
        EntityKind::Banner,
    ];

    /// Name of the identity attribute in storage shape.
    pub fn id_field(self) -> &'static str {
        match self {
            EntityKind::Section => "sectionId",
            EntityKind::Category => "categoryId",
            EntityKind::Subcategory => "subcategoryId",
            EntityKind::Product => "productId",
            EntityKind::Banner => "bannerId",
        }
    }

    /// Upper-case prefix used in partition and sort keys.
    pub fn key_prefix(self) -> &'static str {
        match self {
            EntityKind::Section => "SECTION",
            EntityKind::Category => "CATEGORY",
            EntityKind::Subcategory => "SUBCATEGORY",
            EntityKind::Product => "PRODUCT",
            EntityKind::Banner => "BANNER",
        }
    }

    /// Object-store folder for this entity's images, if it has any.
    pub fn image_folder(self) -> Option<&'static str> {
        match self {
            EntityKind::Section => Some("sections"),
            EntityKind::Category => Some("category"),
            EntityKind::Product => Some("products"),
            EntityKind::Banner => Some("banners"),
            EntityKind::Subcategory => None,
        }
    }

    /// Human-readable label used in error messages ("Category", ...).
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Section => "Section",
            EntityKind::Category => "Category",
            EntityKind::Subcategory => "Subcategory",
            EntityKind::Product => "Product",
            EntityKind::Banner => "Banner",
        }
    }

    /// Whether names must be unique (case-insensitively) within this kind.
    pub fn has_unique_names(self) -> bool {
        matches!(self, EntityKind::Category | EntityKind::Subcategory)
    }

    /// Derive the storage address of a storage-shape item.
    ///
    /// Requires the identity attribute (and `categoryId` for subcategories)
    /// to be present as non-empty strings.
    pub fn key_for(self, item: &Map<String, Value>) -> Result<ItemKey> {
        let id = non_empty_str(item, self.id_field()).ok_or_else(|| {
            CatalogError::InvalidArgument(format!(
                "{} item has no {}",
                self.label(),
                self.id_field()
            ))
        })?;

        match self {
            EntityKind::Subcategory => {
                let category_id = non_empty_str(item, "categoryId").ok_or_else(|| {
                    CatalogError::validation("categoryId is required for a subcategory")
                })?;
                Ok(ItemKey::subcategory(category_id, id))
            }
            _ => Ok(ItemKey::meta(self, id)),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ItemKey
// ---------------------------------------------------------------------------

/// A composite (partition key, sort key) address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub pk: String,
    pub sk: String,
}

impl ItemKey {
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
        }
    }

    /// `<ENTITY>#<id>` / `META`.
    pub fn meta(kind: EntityKind, id: &str) -> Self {
        Self::new(format!("{}#{}", kind.key_prefix(), id), META_SORT_KEY)
    }

    /// `CATEGORY#<categoryId>` / `SUBCATEGORY#<subcategoryId>`.
    pub fn subcategory(category_id: &str, subcategory_id: &str) -> Self {
        Self::new(
            format!("{}#{}", EntityKind::Category.key_prefix(), category_id),
            format!("{}#{}", EntityKind::Subcategory.key_prefix(), subcategory_id),
        )
    }

    /// Read the address already stamped on a stored item.
    pub fn of_item(item: &Value) -> Option<Self> {
        let pk = item.get(PK_ATTR)?.as_str()?;
        let sk = item.get(SK_ATTR)?.as_str()?;
        Some(Self::new(pk, sk))
    }

    /// Write this address onto an item.
    pub fn stamp(&self, item: &mut Map<String, Value>) {
        item.insert(PK_ATTR.to_string(), Value::String(self.pk.clone()));
        item.insert(SK_ATTR.to_string(), Value::String(self.sk.clone()));
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pk, self.sk)
    }
}

pub(crate) fn non_empty_str<'a>(item: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    item.get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
}
