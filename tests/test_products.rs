//! Product store: specs mapping, image lists, deletion.

mod common;

use catalog_admin::{mapper, EntityKind};
use serde_json::json;

const KIND: EntityKind = EntityKind::Product;

#[test]
fn specs_collapse_duplicate_keys() {
    let catalog = common::setup_catalog();
    let product = common::create(
        &catalog,
        KIND,
        json!({
            "id": "p1",
            "name": "Desk",
            "specs": [
                { "key": "Color", "value": "Red" },
                { "key": "Color", "value": "Blue" }
            ]
        }),
    );
    assert_eq!(product["specs"], json!([{ "key": "Color", "value": "Blue" }]));

    let stored = catalog.products().get("p1").unwrap().unwrap();
    assert_eq!(stored["specs"], json!({ "Color": "Blue" }));
}

#[test]
fn new_products_get_empty_gallery_and_specs() {
    let catalog = common::setup_catalog();
    let stored = catalog
        .products()
        .create(json!({ "name": "Stool" }))
        .unwrap();
    assert_eq!(stored["images"], json!([]));
    assert_eq!(stored["specs"], json!({}));
    assert_eq!(stored["SK"], "META");

    let client = mapper::from_storage(KIND, stored);
    assert_eq!(client["imageUrls"], json!([]));
    assert_eq!(client["specs"], json!([]));
}

#[test]
fn images_keep_their_order() {
    let catalog = common::setup_catalog();
    let urls = json!(["https://cdn/3.jpg", "https://cdn/1.jpg", "https://cdn/2.jpg"]);
    let product = common::create(
        &catalog,
        KIND,
        json!({ "id": "p1", "name": "Desk", "imageUrls": urls, "thumbnailUrl": "https://cdn/t.jpg" }),
    );
    assert_eq!(product["imageUrls"], urls);
    assert_eq!(product["thumbnailUrl"], "https://cdn/t.jpg");
}

#[test]
fn update_replaces_specs_and_keeps_flags() {
    let catalog = common::setup_catalog();
    common::seed_catalog(&catalog);

    let updated = common::update(
        &catalog,
        KIND,
        "prod-corner",
        json!({ "specs": [{ "key": "Seats", "value": "6" }, { "key": "Fabric", "value": "Linen" }] }),
    );
    let specs = updated["specs"].as_array().unwrap();
    assert_eq!(specs.len(), 2);
    assert!(specs.contains(&json!({ "key": "Seats", "value": "6" })));
    assert_eq!(updated["isBestSeller"], true);
    assert_eq!(updated["rating"], 4.7);
    assert_eq!(updated["slug"], "corner-sofa");
}

#[test]
fn product_names_need_not_be_unique() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "name": "Desk" }));
    common::create(&catalog, KIND, json!({ "name": "Desk" }));
    assert_eq!(catalog.products().list().unwrap().len(), 2);
}

#[test]
fn delete_removes_product() {
    let catalog = common::setup_catalog();
    common::seed_catalog(&catalog);

    assert!(catalog.products().delete("prod-lift").unwrap());
    assert!(catalog.products().get("prod-lift").unwrap().is_none());
    assert!(!catalog.products().delete("prod-lift").unwrap());
    assert_eq!(catalog.products().list().unwrap().len(), 2);
}

#[test]
fn list_by_category() {
    let catalog = common::setup_catalog();
    common::seed_catalog(&catalog);

    let sofas: Vec<_> = catalog
        .products()
        .list_by_category("cat-sofas")
        .unwrap()
        .into_iter()
        .map(|p| mapper::from_storage(KIND, p))
        .collect();
    assert_eq!(common::ids(&sofas), vec!["prod-corner", "prod-loveseat"]);
}
