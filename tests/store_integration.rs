//! Integration tests for the SQLite storage layer.
//!
//! Exercises resource and action CRUD through the store traits, durability
//! across reopen, and schema version checking against a real database file.

mod common;

use common::{create_test_database, ActionFixture};
use reserv::store::{ActionStore, Database, ResourceStore, StoreConfig};
use reserv::{Error, Resource};

#[test]
fn resource_crud_through_trait() {
    let mut store: Box<dyn ResourceStore> = Box::new(create_test_database());

    let created = store.insert_resource("Room A", "Floor 1").unwrap();
    assert!(created.id() > 0);

    let loaded = store.get_resource(created.id()).unwrap();
    assert_eq!(loaded, Some(created.clone()));

    let updated = created.with_fields("Room B", "Floor 2");
    assert!(store.update_resource(&updated).unwrap());
    assert_eq!(store.get_resource(created.id()).unwrap(), Some(updated));

    assert_eq!(store.list_resources().unwrap().len(), 1);
}

#[test]
fn action_crud_through_trait() {
    let mut store: Box<dyn ActionStore> = Box::new(create_test_database());

    let action = ActionFixture::new()
        .with_kind("resource-created")
        .with_detail("Room A")
        .build();

    let created = store.insert_action(&action).unwrap();
    assert!(created.id() > 0);

    let loaded = store.get_action(created.id()).unwrap().unwrap();
    assert_eq!(loaded, created);

    let amended = ActionFixture::new()
        .with_kind("resource-updated")
        .with_recorded_at(created.recorded_at())
        .build()
        .with_id(created.id());
    assert!(store.update_action(&amended).unwrap());
    assert_eq!(store.get_action(created.id()).unwrap(), Some(amended));

    assert!(store.delete_action(created.id()).unwrap());
    assert!(store.get_action(created.id()).unwrap().is_none());
    assert!(store.list_actions().unwrap().is_empty());
}

#[test]
fn records_survive_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("reserv.db");

    let resource_id;
    let action_id;
    {
        let mut db = Database::open(StoreConfig::new(&db_path)).unwrap();
        resource_id = db.insert_resource("Room A", "Floor 1").unwrap().id();
        action_id = db
            .insert_action(&ActionFixture::new().build())
            .unwrap()
            .id();
    }

    let db = Database::open(StoreConfig::new(&db_path)).unwrap();
    let resource = db.get_resource(resource_id).unwrap().unwrap();
    assert_eq!(resource.name(), "Room A");
    assert!(db.get_action(action_id).unwrap().is_some());
}

#[test]
fn update_does_not_touch_other_records() {
    let mut db = create_test_database();

    let a = db.insert_resource("Room A", "Floor 1").unwrap();
    let b = db.insert_resource("Room B", "Floor 2").unwrap();

    let changed = a.with_fields("Room A2", "Floor 9");
    assert!(ResourceStore::update_resource(&mut db, &changed).unwrap());

    assert_eq!(db.get_resource(b.id()).unwrap(), Some(b));
}

#[test]
fn update_missing_resource_reports_false() {
    let mut db = create_test_database();
    let ghost = Resource::new(777, "Ghost", "Nowhere");
    assert!(!ResourceStore::update_resource(&mut db, &ghost).unwrap());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("reserv.db");

    // Initialize, then tamper with the stored version
    {
        let db = Database::open(StoreConfig::new(&db_path)).unwrap();
        db.connection()
            .execute(
                "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
                [],
            )
            .unwrap();
    }

    let result = Database::open(StoreConfig::new(&db_path));
    match result {
        Err(Error::UnsupportedSchemaVersion { found, .. }) => assert_eq!(found, 999),
        other => panic!("expected UnsupportedSchemaVersion, got {other:?}"),
    }
}
