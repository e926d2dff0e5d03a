//! Shared test fixtures for the catalog integration tests.
//!
//! `setup_catalog()` opens an in-memory catalog; `create()` pushes a
//! client-shape item through the mapper and the store the way the API does.

#![allow(dead_code)]

use catalog_admin::{mapper, CatalogAdmin, EntityKind};
use serde_json::{json, Value};

pub fn setup_catalog() -> CatalogAdmin {
    CatalogAdmin::builder().in_memory().build().unwrap()
}

/// Create a client-shape item and return the persisted item in client shape.
pub fn create(catalog: &CatalogAdmin, kind: EntityKind, item: Value) -> Value {
    let stored = catalog
        .store(kind)
        .create(mapper::to_storage(kind, item).unwrap())
        .unwrap();
    mapper::from_storage(kind, stored)
}

/// Update by id with a client-shape patch; returns client shape.
pub fn update(catalog: &CatalogAdmin, kind: EntityKind, id: &str, patch: Value) -> Value {
    let stored = catalog
        .store(kind)
        .update(id, mapper::to_storage(kind, patch).unwrap())
        .unwrap();
    mapper::from_storage(kind, stored)
}

/// A small catalog: one section, two categories, two subcategories, three
/// products and two banners, all with fixed ids.
pub fn seed_catalog(catalog: &CatalogAdmin) {
    create(
        catalog,
        EntityKind::Section,
        json!({ "id": "sec-living", "name": "Living Room", "order": 1, "showOnHome": true }),
    );
    create(
        catalog,
        EntityKind::Category,
        json!({ "id": "cat-sofas", "name": "Sofas", "sectionId": "sec-living", "order": 1 }),
    );
    create(
        catalog,
        EntityKind::Category,
        json!({ "id": "cat-desks", "name": "Desks", "order": 2 }),
    );
    create(
        catalog,
        EntityKind::Subcategory,
        json!({ "id": "sub-sectional", "name": "Sectional", "categoryId": "cat-sofas" }),
    );
    create(
        catalog,
        EntityKind::Subcategory,
        json!({ "id": "sub-standing", "name": "Standing Desks", "categoryId": "cat-desks" }),
    );
    create(
        catalog,
        EntityKind::Product,
        json!({
            "id": "prod-corner",
            "name": "Corner Sofa",
            "categoryId": "cat-sofas",
            "subcategoryId": "sub-sectional",
            "specs": [{ "key": "Seats", "value": "5" }],
            "isBestSeller": true,
            "rating": 4.7
        }),
    );
    create(
        catalog,
        EntityKind::Product,
        json!({ "id": "prod-loveseat", "name": "Loveseat", "categoryId": "cat-sofas" }),
    );
    create(
        catalog,
        EntityKind::Product,
        json!({ "id": "prod-lift", "name": "Lift Desk", "categoryId": "cat-desks" }),
    );
    create(
        catalog,
        EntityKind::Banner,
        json!({ "id": "ban-hero", "title": "Spring Sale", "position": "HOME_HERO", "order": 1 }),
    );
    create(
        catalog,
        EntityKind::Banner,
        json!({
            "id": "ban-sofas",
            "title": "Sofa Week",
            "position": "CATEGORY_TOP",
            "categoryId": "cat-sofas",
            "redirectType": "CATEGORY",
            "redirectValue": "cat-sofas"
        }),
    );
}

pub fn ids(items: &[Value]) -> Vec<String> {
    let mut ids: Vec<String> = items
        .iter()
        .filter_map(|i| i["id"].as_str().map(str::to_string))
        .collect();
    ids.sort();
    ids
}
