//! Client shape <-> storage shape transforms.

use catalog_admin::mapper::{from_storage, specs_to_list, specs_to_map, to_storage};
use catalog_admin::{CatalogError, EntityKind};
use serde_json::json;

// ---------------------------------------------------------------------------
// to_storage
// ---------------------------------------------------------------------------

#[test]
fn to_storage_renames_id_to_identity_field() {
    let stored = to_storage(EntityKind::Category, json!({ "id": "c1", "name": "Chairs" })).unwrap();
    assert_eq!(stored["categoryId"], "c1");
    assert!(stored.get("id").is_none());
    assert_eq!(stored["name"], "Chairs");
}

#[test]
fn to_storage_uses_each_kinds_identity_field() {
    let cases = [
        (EntityKind::Section, "sectionId"),
        (EntityKind::Category, "categoryId"),
        (EntityKind::Subcategory, "subcategoryId"),
        (EntityKind::Product, "productId"),
        (EntityKind::Banner, "bannerId"),
    ];
    for (kind, field) in cases {
        let stored = to_storage(kind, json!({ "id": "x" })).unwrap();
        assert_eq!(stored[field], "x", "{kind}");
    }
}

#[test]
fn to_storage_section_image() {
    let stored = to_storage(
        EntityKind::Section,
        json!({ "id": "s1", "imageUrl": "https://cdn/sections/a.jpg" }),
    )
    .unwrap();
    assert_eq!(stored["image"], "https://cdn/sections/a.jpg");
    assert!(stored.get("imageUrl").is_none());
}

#[test]
fn to_storage_product_fields() {
    let stored = to_storage(
        EntityKind::Product,
        json!({
            "id": "p1",
            "thumbnailUrl": "https://cdn/t.jpg",
            "imageUrls": ["https://cdn/1.jpg", "https://cdn/2.jpg"],
            "specs": [{ "key": "Color", "value": "Red" }]
        }),
    )
    .unwrap();
    assert_eq!(stored["productId"], "p1");
    assert_eq!(stored["thumbnailImg"], "https://cdn/t.jpg");
    assert_eq!(stored["images"], json!(["https://cdn/1.jpg", "https://cdn/2.jpg"]));
    assert_eq!(stored["specs"], json!({ "Color": "Red" }));
    assert!(stored.get("thumbnailUrl").is_none());
    assert!(stored.get("imageUrls").is_none());
}

#[test]
fn to_storage_specs_last_write_wins() {
    let stored = to_storage(
        EntityKind::Product,
        json!({
            "id": "p1",
            "specs": [
                { "key": "Color", "value": "Red" },
                { "key": "Color", "value": "Blue" }
            ]
        }),
    )
    .unwrap();
    assert_eq!(stored["specs"], json!({ "Color": "Blue" }));
}

#[test]
fn to_storage_leaves_other_kinds_alone() {
    let item = json!({ "id": "b1", "title": "Sale", "image": "https://cdn/b.jpg" });
    let stored = to_storage(EntityKind::Banner, item).unwrap();
    assert_eq!(stored["image"], "https://cdn/b.jpg");
    assert_eq!(stored["title"], "Sale");
}

#[test]
fn to_storage_rejects_non_objects() {
    let err = to_storage(EntityKind::Category, json!(["not", "an", "object"])).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// from_storage
// ---------------------------------------------------------------------------

#[test]
fn from_storage_drops_address_attributes() {
    let client = from_storage(
        EntityKind::Category,
        json!({ "PK": "CATEGORY#c1", "SK": "META", "categoryId": "c1", "name": "Chairs" }),
    );
    assert_eq!(client, json!({ "id": "c1", "name": "Chairs" }));
}

#[test]
fn from_storage_product_defaults() {
    let client = from_storage(
        EntityKind::Product,
        json!({ "productId": "p1", "name": "Desk" }),
    );
    assert_eq!(client["id"], "p1");
    assert_eq!(client["imageUrls"], json!([]));
    assert_eq!(client["specs"], json!([]));
    assert!(client.get("productId").is_none());
}

#[test]
fn from_storage_product_expands_specs() {
    let client = from_storage(
        EntityKind::Product,
        json!({
            "productId": "p1",
            "thumbnailImg": "https://cdn/t.jpg",
            "images": ["https://cdn/1.jpg"],
            "specs": { "Material": "Oak" }
        }),
    );
    assert_eq!(client["thumbnailUrl"], "https://cdn/t.jpg");
    assert_eq!(client["imageUrls"], json!(["https://cdn/1.jpg"]));
    assert_eq!(client["specs"], json!([{ "key": "Material", "value": "Oak" }]));
}

#[test]
fn from_storage_banner_image_defaults_to_empty() {
    let client = from_storage(EntityKind::Banner, json!({ "bannerId": "b1", "title": "Sale" }));
    assert_eq!(client["image"], "");
}

#[test]
fn from_storage_section_image() {
    let client = from_storage(
        EntityKind::Section,
        json!({ "sectionId": "s1", "image": "https://cdn/s.jpg" }),
    );
    assert_eq!(client["imageUrl"], "https://cdn/s.jpg");
    assert!(client.get("image").is_none());
}

#[test]
fn round_trip_preserves_fields() {
    let item = json!({
        "id": "p9",
        "name": "Arm Chair",
        "thumbnailUrl": "https://cdn/t.jpg",
        "imageUrls": ["https://cdn/a.jpg", "https://cdn/b.jpg"],
        "specs": [{ "key": "Width", "value": "80cm" }],
        "isActive": true,
        "rating": 4.0
    });
    let back = from_storage(EntityKind::Product, to_storage(EntityKind::Product, item.clone()).unwrap());
    assert_eq!(back, item);
}

#[test]
fn round_trip_section_keeps_image_url() {
    let item = json!({
        "id": "s1",
        "name": "Living Room",
        "imageUrl": "https://cdn/sections/living.jpg",
        "showOnHome": true,
        "order": 2
    });
    let stored = to_storage(EntityKind::Section, item.clone()).unwrap();
    assert_eq!(stored["image"], "https://cdn/sections/living.jpg");
    assert_eq!(from_storage(EntityKind::Section, stored), item);
}

#[test]
fn round_trip_banner_with_image() {
    let item = json!({
        "id": "b1",
        "title": "Summer Sale",
        "image": "https://cdn/banners/summer.jpg",
        "position": "hero",
        "redirectType": "url",
        "redirectUrl": "https://shop/sale"
    });
    let back = from_storage(EntityKind::Banner, to_storage(EntityKind::Banner, item.clone()).unwrap());
    assert_eq!(back, item);
}

#[test]
fn round_trip_subcategory_keeps_parent() {
    let item = json!({ "id": "sub1", "categoryId": "c1", "name": "Recliners", "order": 0 });
    let stored = to_storage(EntityKind::Subcategory, item.clone()).unwrap();
    assert_eq!(stored["subcategoryId"], "sub1");
    assert_eq!(stored["categoryId"], "c1");
    assert_eq!(from_storage(EntityKind::Subcategory, stored), item);
}

// ---------------------------------------------------------------------------
// specs helpers
// ---------------------------------------------------------------------------

#[test]
fn specs_to_map_drops_empty_keys() {
    let map = specs_to_map(json!([
        { "key": "", "value": "ignored" },
        { "key": "Depth", "value": "60cm" },
        { "value": "no key" }
    ]));
    assert_eq!(map, json!({ "Depth": "60cm" }));
}

#[test]
fn specs_to_map_passes_mappings_through() {
    assert_eq!(specs_to_map(json!({ "A": "1" })), json!({ "A": "1" }));
    assert_eq!(specs_to_map(json!("garbage")), json!({}));
}

#[test]
fn specs_to_list_contains_every_entry() {
    let list = specs_to_list(json!({ "Height": "90cm", "Color": "Grey" }));
    assert_eq!(list.len(), 2);
    assert!(list.contains(&json!({ "key": "Height", "value": "90cm" })));
    assert!(list.contains(&json!({ "key": "Color", "value": "Grey" })));
}
