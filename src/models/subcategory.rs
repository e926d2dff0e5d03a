use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Subcategory: Always owned by exactly one category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: Option<String>,
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
