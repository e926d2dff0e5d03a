use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Section: Top level of the catalog hierarchy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    /// Lucide icon name shown next to the section in the storefront menu.
    pub icon: Option<String>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
    pub show_on_home: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
