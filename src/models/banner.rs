use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BannerPosition / RedirectType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BannerPosition {
    HomeHero,
    HomeMiddle,
    HomeBottom,
    /// Shown at the top of a single category page; needs `categoryId`.
    CategoryTop,
    ProductSidebar,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedirectType {
    #[default]
    None,
    Category,
    Product,
}

// ---------------------------------------------------------------------------
// Banner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub position: Option<BannerPosition>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
    pub redirect_type: Option<RedirectType>,
    pub redirect_value: Option<String>,
    pub category_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
