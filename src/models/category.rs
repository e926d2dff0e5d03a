use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<String>,
    pub section_id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
