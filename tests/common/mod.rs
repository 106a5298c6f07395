//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the reserv library.

use std::time::{Duration, SystemTime};

use reserv::store::{Database, StoreConfig};
use reserv::Action;

/// Creates a test database in a temporary location.
///
/// The temporary directory is intentionally leaked so the database file
/// outlives the helper call.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let db_path = temp_dir.path().join("test.db");
    std::mem::forget(temp_dir);

    Database::open(StoreConfig::new(db_path)).expect("should open test database")
}

/// Builder for creating test actions with sensible defaults.
///
/// Timestamps default to the current time aligned to whole seconds, so
/// records compare equal after a round trip through epoch-seconds storage.
#[allow(dead_code)]
pub struct ActionFixture {
    kind: String,
    detail: Option<String>,
    recorded_at: Option<SystemTime>,
}

#[allow(dead_code)]
impl ActionFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - kind: "test-action"
    /// - detail: None
    /// - recorded_at: current time, whole seconds
    pub fn new() -> Self {
        Self {
            kind: "test-action".to_string(),
            detail: None,
            recorded_at: None,
        }
    }

    /// Sets the action kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the recorded-at timestamp.
    pub fn with_recorded_at(mut self, recorded_at: SystemTime) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Builds the action.
    ///
    /// # Panics
    ///
    /// Panics if the fixture fails validation. This is acceptable in test
    /// code where we want to fail fast on invalid fixtures.
    pub fn build(self) -> Action {
        let recorded_at = self.recorded_at.unwrap_or_else(|| {
            let secs = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .expect("clock should be past the epoch")
                .as_secs();
            SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
        });

        Action::builder(self.kind)
            .detail(self.detail)
            .recorded_at(recorded_at)
            .build()
            .expect("fixture should build valid action")
    }
}

impl Default for ActionFixture {
    fn default() -> Self {
        Self::new()
    }
}
