//! Category store: creation defaults, name uniqueness, merge-on-update.

mod common;

use std::thread::sleep;
use std::time::Duration;

use catalog_admin::{mapper, CatalogError, EntityKind, ItemKey};
use serde_json::json;

const KIND: EntityKind = EntityKind::Category;

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[test]
fn create_assigns_id_slug_and_timestamps() {
    let catalog = common::setup_catalog();
    let stored = catalog
        .categories()
        .create(mapper::to_storage(KIND, json!({ "name": "Office Furniture", "order": 1, "isActive": true })).unwrap())
        .unwrap();

    let id = stored["categoryId"].as_str().unwrap();
    assert_eq!(id.len(), 36);
    assert_eq!(stored["PK"], format!("CATEGORY#{id}"));
    assert_eq!(stored["SK"], "META");
    assert_eq!(stored["slug"], "office-furniture");
    assert_eq!(stored["createdAt"], stored["updatedAt"]);
    assert!(stored["createdAt"].as_str().unwrap().ends_with('Z'));

    let client = mapper::from_storage(KIND, stored.clone());
    assert_eq!(client["id"], id);
    assert_eq!(client["order"], 1);
    assert_eq!(client["isActive"], true);
}

#[test]
fn create_keeps_caller_id_and_slug() {
    let catalog = common::setup_catalog();
    let client = common::create(
        &catalog,
        KIND,
        json!({ "id": "c-42", "name": "Beds", "slug": "all-beds" }),
    );
    assert_eq!(client["id"], "c-42");
    assert_eq!(client["slug"], "all-beds");

    let fetched = catalog
        .categories()
        .table()
        .get_by_key(&ItemKey::new("CATEGORY#c-42", "META"))
        .unwrap();
    assert!(fetched.is_some());
}

#[test]
fn create_rejects_duplicate_name_case_insensitively() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "name": "Chairs" }));

    let err = catalog
        .categories()
        .create(mapper::to_storage(KIND, json!({ "name": "CHAIRS" })).unwrap())
        .unwrap_err();
    match err {
        CatalogError::Validation(msg) => assert_eq!(msg, "Category with this name already exists"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(catalog.categories().list().unwrap().len(), 1);
}

#[test]
fn create_with_existing_id_overwrites_same_name() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "id": "c1", "name": "Sofas", "order": 1 }));
    common::create(&catalog, KIND, json!({ "name": "Tables" }));

    let again = common::create(&catalog, KIND, json!({ "id": "c1", "name": "Sofas", "order": 2 }));
    assert_eq!(again["order"], 2);
    assert_eq!(catalog.categories().list().unwrap().len(), 2);

    let err = catalog
        .categories()
        .create(mapper::to_storage(KIND, json!({ "id": "c1", "name": "tables" })).unwrap())
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
}

#[test]
fn create_requires_name() {
    let catalog = common::setup_catalog();
    let err = catalog
        .categories()
        .create(json!({ "order": 3 }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
}

#[test]
fn create_rejects_non_object() {
    let catalog = common::setup_catalog();
    let err = catalog.categories().create(json!("Chairs")).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[test]
fn update_merges_and_preserves_created_at() {
    let catalog = common::setup_catalog();
    let created = common::create(
        &catalog,
        KIND,
        json!({ "id": "c1", "name": "Tables", "order": 2, "isActive": true }),
    );

    sleep(Duration::from_millis(5));
    let updated = common::update(&catalog, KIND, "c1", json!({ "order": 7 }));

    assert_eq!(updated["name"], "Tables");
    assert_eq!(updated["order"], 7);
    assert_eq!(updated["isActive"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
}

#[test]
fn update_ignores_attempts_to_move_identity() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "id": "c1", "name": "Tables" }));

    let updated = catalog
        .categories()
        .update(
            "c1",
            json!({ "categoryId": "c2", "PK": "CATEGORY#c2", "createdAt": "1999-01-01T00:00:00.000Z" }),
        )
        .unwrap();
    assert_eq!(updated["categoryId"], "c1");
    assert_eq!(updated["PK"], "CATEGORY#c1");
    assert_ne!(updated["createdAt"], "1999-01-01T00:00:00.000Z");
    assert!(catalog.categories().get("c2").unwrap().is_none());
}

#[test]
fn update_may_keep_its_own_name() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "id": "c1", "name": "Tables" }));
    let updated = common::update(&catalog, KIND, "c1", json!({ "name": "tables" }));
    assert_eq!(updated["name"], "tables");
}

#[test]
fn update_rejects_another_categorys_name() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "id": "c1", "name": "Tables" }));
    common::create(&catalog, KIND, json!({ "id": "c2", "name": "Chairs" }));

    let err = catalog
        .categories()
        .update("c2", json!({ "name": "Tables" }))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert_eq!(catalog.categories().get("c2").unwrap().unwrap()["name"], "Chairs");
}

#[test]
fn update_missing_is_not_found() {
    let catalog = common::setup_catalog();
    let err = catalog
        .categories()
        .update("ghost", json!({ "name": "Ghost" }))
        .unwrap_err();
    match err {
        CatalogError::NotFound(msg) => assert_eq!(msg, "Category ghost not found"),
        other => panic!("expected not found, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// delete / queries
// ---------------------------------------------------------------------------

#[test]
fn delete_returns_whether_item_existed() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "id": "c1", "name": "Tables" }));

    assert!(catalog.categories().delete("c1").unwrap());
    assert!(!catalog.categories().delete("c1").unwrap());
    assert!(catalog.categories().get("c1").unwrap().is_none());
}

#[test]
fn name_check_before_upload() {
    let catalog = common::setup_catalog();
    common::create(&catalog, KIND, json!({ "id": "c1", "name": "Tables" }));

    assert!(catalog.categories().ensure_name_available("tables", None).is_err());
    assert!(catalog.categories().ensure_name_available("tables", Some("c1")).is_ok());
    assert!(catalog.categories().ensure_name_available("Lamps", None).is_ok());
}

#[test]
fn list_by_section() {
    let catalog = common::setup_catalog();
    common::seed_catalog(&catalog);

    let living = catalog.categories().list_by_section("sec-living").unwrap();
    let living: Vec<_> = living.into_iter().map(|c| mapper::from_storage(KIND, c)).collect();
    assert_eq!(common::ids(&living), vec!["cat-sofas"]);
    assert_eq!(catalog.categories().list().unwrap().len(), 2);
}
