//! Shared test utilities for store unit tests.
//!
//! This module provides helper functions used across multiple store test
//! modules.

use tempfile::tempdir;

use crate::store::{Database, StoreConfig};
use crate::Action;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = StoreConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test action of the given kind with no detail.
///
/// The timestamp is aligned to whole seconds so values compare equal after
/// a round trip through epoch-seconds storage.
///
/// # Panics
///
/// Panics if the action cannot be built. This is acceptable in test code
/// where we want to fail fast.
#[must_use]
pub fn create_test_action(kind: &str) -> Action {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let aligned = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(secs);

    Action::builder(kind).recorded_at(aligned).build().unwrap()
}
