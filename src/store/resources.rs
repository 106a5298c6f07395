//! SQLite CRUD operations for resource records.
//!
//! Write operations run inside IMMEDIATE transactions so a single update
//! either fully applies or fully fails under concurrent access.

use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::Resource;

use super::connection::Database;
use super::schema::{INSERT_RESOURCE, LIST_RESOURCES, SELECT_RESOURCE, UPDATE_RESOURCE};
use super::ResourceStore;

/// Deserializes a resource from a database row.
///
/// Expects row fields in this order: id, name, location.
fn row_to_resource(row: &rusqlite::Row<'_>) -> rusqlite::Result<Resource> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let location: String = row.get(2)?;
    Ok(Resource::new(id, name, location))
}

impl Database {
    /// Inserts a new resource and returns the record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - The insert fails
    /// - The transaction cannot be committed
    pub fn insert_resource(&mut self, name: &str, location: &str) -> Result<Resource> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(INSERT_RESOURCE, params![name, location])?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(Resource::new(id, name, location))
    }

    /// Retrieves a resource by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(resource))` if the resource exists
    /// - `Ok(None)` if the resource doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_resource(&self, id: i64) -> Result<Option<Resource>> {
        let mut stmt = self.conn.prepare(SELECT_RESOURCE)?;

        match stmt.query_row(params![id], row_to_resource) {
            Ok(resource) => Ok(Some(resource)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the stored resource with the same id as `resource`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the resource was found and replaced
    /// - `Ok(false)` if no resource with that id exists
    pub fn update_resource(&mut self, resource: &Resource) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(
            UPDATE_RESOURCE,
            params![resource.name(), resource.location(), resource.id()],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Lists all resources in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_resources(&self) -> Result<Vec<Resource>> {
        let mut stmt = self.conn.prepare(LIST_RESOURCES)?;

        let resources = stmt
            .query_map([], row_to_resource)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(resources)
    }
}

impl ResourceStore for Database {
    fn insert_resource(&mut self, name: &str, location: &str) -> Result<Resource> {
        Self::insert_resource(self, name, location)
    }

    fn get_resource(&self, id: i64) -> Result<Option<Resource>> {
        Self::get_resource(self, id)
    }

    fn update_resource(&mut self, resource: &Resource) -> Result<bool> {
        Self::update_resource(self, resource)
    }

    fn list_resources(&self) -> Result<Vec<Resource>> {
        Self::list_resources(self)
    }
}
