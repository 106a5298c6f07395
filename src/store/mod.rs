//! Storage layer for resource and action records.
//!
//! This module defines the persistence boundary as explicit traits,
//! [`ResourceStore`] and [`ActionStore`], with two implementations:
//!
//! - [`Database`]: SQLite-backed storage with connection management and
//!   schema versioning.
//! - [`MemoryStore`]: an in-memory implementation for tests and embedders
//!   that do not need durability.
//!
//! # Examples
//!
//! ```no_run
//! use reserv::store::{Database, ResourceStore, StoreConfig};
//!
//! let config = StoreConfig::new("/tmp/reserv.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let resource = db.insert_resource("Conference room A", "Building 2").unwrap();
//! assert!(db.get_resource(resource.id()).unwrap().is_some());
//! ```

mod actions;
mod config;
mod connection;
mod memory;
pub mod migrations;
mod resources;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

use crate::error::Result;
use crate::{Action, Resource};

// Re-export public API
pub use config::{default_data_dir, resolve_store_path, StoreConfig};
pub use connection::Database;
pub use memory::MemoryStore;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};

/// Persistence boundary for [`Resource`] records.
///
/// Implementations must guarantee that a single update either fully applies
/// or fully fails, and that concurrent writers to different identities do
/// not interfere. Identity assignment is the store's responsibility: ids
/// handed out by [`insert_resource`](Self::insert_resource) are unique
/// within the store and never reused.
pub trait ResourceStore {
    /// Persists a new resource and returns the stored record with its
    /// assigned identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn insert_resource(&mut self, name: &str, location: &str) -> Result<Resource>;

    /// Retrieves a resource by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails; a missing record is `Ok(None)`,
    /// not an error.
    fn get_resource(&self, id: i64) -> Result<Option<Resource>>;

    /// Replaces the stored record with the same id as `resource`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a record with that id existed and was replaced
    /// - `Ok(false)` if no record with that id exists
    fn update_resource(&mut self, resource: &Resource) -> Result<bool>;

    /// Lists all resources, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_resources(&self) -> Result<Vec<Resource>>;
}

/// Persistence boundary for [`Action`] records.
///
/// Identity-keyed CRUD only; richer querying is an extension point.
pub trait ActionStore {
    /// Persists a new action and returns the stored record with its
    /// assigned identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted.
    fn insert_action(&mut self, action: &Action) -> Result<Action>;

    /// Retrieves an action by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails; a missing record is `Ok(None)`.
    fn get_action(&self, id: i64) -> Result<Option<Action>>;

    /// Replaces the stored record with the same id as `action`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a record with that id existed and was replaced
    /// - `Ok(false)` if no record with that id exists
    fn update_action(&mut self, action: &Action) -> Result<bool>;

    /// Deletes an action by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a record was deleted
    /// - `Ok(false)` if no record with that id exists
    fn delete_action(&mut self, id: i64) -> Result<bool>;

    /// Lists all actions, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_actions(&self) -> Result<Vec<Action>>;
}
