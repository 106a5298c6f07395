//! SQLite CRUD operations for action records.
//!
//! Timestamps are stored as Unix epoch seconds, so sub-second precision is
//! lost on a round trip through the store.

use std::time::{Duration, SystemTime};

use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::Action;

use super::connection::Database;
use super::schema::{DELETE_ACTION, INSERT_ACTION, LIST_ACTIONS, SELECT_ACTION, UPDATE_ACTION};
use super::ActionStore;

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| crate::error::Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}

/// Deserializes an action from a database row.
///
/// Expects row fields in this order: id, kind, detail, `recorded_at`.
fn row_to_action(row: &rusqlite::Row<'_>) -> rusqlite::Result<Action> {
    let id: i64 = row.get(0)?;
    let kind: String = row.get(1)?;
    let detail: Option<String> = row.get(2)?;
    let recorded_secs: i64 = row.get(3)?;

    Action::builder(kind)
        .id(id)
        .detail(detail)
        .recorded_at(unix_secs_to_systemtime(recorded_secs))
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

impl Database {
    /// Inserts a new action and returns the record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction, timestamp conversion, or insert
    /// fails.
    pub fn insert_action(&mut self, action: &Action) -> Result<Action> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let recorded_secs = systemtime_to_unix_secs(action.recorded_at())?;

        tx.execute(
            INSERT_ACTION,
            params![action.kind(), action.detail(), recorded_secs],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(action.with_id(id))
    }

    /// Retrieves an action by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(action))` if the action exists
    /// - `Ok(None)` if the action doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_action(&self, id: i64) -> Result<Option<Action>> {
        let mut stmt = self.conn.prepare(SELECT_ACTION)?;

        match stmt.query_row(params![id], row_to_action) {
            Ok(action) => Ok(Some(action)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the stored action with the same id as `action`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the action was found and replaced
    /// - `Ok(false)` if no action with that id exists
    pub fn update_action(&mut self, action: &Action) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let recorded_secs = systemtime_to_unix_secs(action.recorded_at())?;

        let rows_affected = tx.execute(
            UPDATE_ACTION,
            params![action.kind(), action.detail(), recorded_secs, action.id()],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes an action by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the action was found and deleted
    /// - `Ok(false)` if no action with that id exists
    pub fn delete_action(&mut self, id: i64) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(DELETE_ACTION, params![id])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Lists all actions in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any action cannot be
    /// deserialized.
    pub fn list_actions(&self) -> Result<Vec<Action>> {
        let mut stmt = self.conn.prepare(LIST_ACTIONS)?;

        let actions = stmt
            .query_map([], row_to_action)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(actions)
    }
}

impl ActionStore for Database {
    fn insert_action(&mut self, action: &Action) -> Result<Action> {
        Self::insert_action(self, action)
    }

    fn get_action(&self, id: i64) -> Result<Option<Action>> {
        Self::get_action(self, id)
    }

    fn update_action(&mut self, action: &Action) -> Result<bool> {
        Self::update_action(self, action)
    }

    fn delete_action(&mut self, id: i64) -> Result<bool> {
        Self::delete_action(self, id)
    }

    fn list_actions(&self) -> Result<Vec<Action>> {
        Self::list_actions(self)
    }
}
