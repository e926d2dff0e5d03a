use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ProductSpec: One row of the specification table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductSpec {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category_id: Option<String>,
    pub subcategory_id: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub specs: Vec<ProductSpec>,
    pub is_active: Option<bool>,
    pub is_new_arrival: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_trending: Option<bool>,
    pub is_premium: Option<bool>,
    pub is_recommended: Option<bool>,
    pub is_on_offer: Option<bool>,
    pub is_custom_order: Option<bool>,
    pub is_in_stock: Option<bool>,
    pub offer_text: Option<String>,
    pub rating: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Product {
    /// Names of the boolean merchandising flags, in form order.
    pub const FLAGS: [&'static str; 10] = [
        "isActive",
        "isNewArrival",
        "isBestSeller",
        "isFeatured",
        "isTrending",
        "isPremium",
        "isRecommended",
        "isOnOffer",
        "isCustomOrder",
        "isInStock",
    ];
}
