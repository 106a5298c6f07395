//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the reserv storage layer.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the resources table.
///
/// Identity is the SQLite rowid; `AUTOINCREMENT` prevents id reuse after
/// hypothetical future deletes. Name and location are NOT NULL because the
/// service layer never persists empty fields.
pub const CREATE_RESOURCES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS resources (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        location TEXT NOT NULL
    )";

/// SQL statement to create the actions table.
///
/// `recorded_at` is stored as Unix epoch seconds.
pub const CREATE_ACTIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS actions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL,
        detail TEXT,
        recorded_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the resource name column.
///
/// This index speeds up name-based lookups by callers layered on top of
/// the identity CRUD.
pub const CREATE_RESOURCE_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_resources_name ON resources(name)";

/// SQL statement to create an index on the action `recorded_at` column.
///
/// This index speeds up time-ordered audit queries.
pub const CREATE_ACTION_RECORDED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_actions_recorded_at ON actions(recorded_at)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a resource. The id is assigned by SQLite.
pub const INSERT_RESOURCE: &str = r"
    INSERT INTO resources (name, location)
    VALUES (?, ?)
";

/// SQL statement to fetch a resource by id.
pub const SELECT_RESOURCE: &str = r"
    SELECT id, name, location
    FROM resources
    WHERE id = ?
";

/// SQL statement to replace a resource record in full.
pub const UPDATE_RESOURCE: &str = r"
    UPDATE resources
    SET name = ?, location = ?
    WHERE id = ?
";

/// SQL statement to list all resources in id order.
pub const LIST_RESOURCES: &str = r"
    SELECT id, name, location
    FROM resources
    ORDER BY id
";

/// SQL statement to insert an action. The id is assigned by SQLite.
pub const INSERT_ACTION: &str = r"
    INSERT INTO actions (kind, detail, recorded_at)
    VALUES (?, ?, ?)
";

/// SQL statement to fetch an action by id.
pub const SELECT_ACTION: &str = r"
    SELECT id, kind, detail, recorded_at
    FROM actions
    WHERE id = ?
";

/// SQL statement to replace an action record in full.
pub const UPDATE_ACTION: &str = r"
    UPDATE actions
    SET kind = ?, detail = ?, recorded_at = ?
    WHERE id = ?
";

/// SQL statement to delete an action by id.
pub const DELETE_ACTION: &str = r"
    DELETE FROM actions
    WHERE id = ?
";

/// SQL statement to list all actions in id order.
pub const LIST_ACTIONS: &str = r"
    SELECT id, kind, detail, recorded_at
    FROM actions
    ORDER BY id
";
