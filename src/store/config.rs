//! Store configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for database connections.
///
/// Contains all parameters needed to open and configure a database
/// connection: the database file path, timeout settings, and access modes.
///
/// # Examples
///
/// ```
/// use reserv::store::StoreConfig;
/// use std::time::Duration;
///
/// // Create a configuration with default settings
/// let config = StoreConfig::new("/tmp/reserv.db");
///
/// // Customize the configuration
/// let config = StoreConfig::new("/tmp/reserv.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl StoreConfig {
    /// Creates a new store configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the connection waits on a
    /// locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use reserv::store::StoreConfig;
    ///
    /// let config = StoreConfig::new("/tmp/reserv.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory for reserv.
///
/// The default directory is `~/.reserv` on Unix-like systems and
/// `%USERPROFILE%\.reserv` on Windows.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })?;
    Ok(PathBuf::from(home).join(".reserv"))
}

/// Resolves the database path using environment variables or defaults.
///
/// The resolution order is:
/// 1. `$RESERV_DATA_DIR/reserv.db` if the `RESERV_DATA_DIR` environment variable is set
/// 2. `~/.reserv/reserv.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `RESERV_DATA_DIR` is not set.
pub fn resolve_store_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("RESERV_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join("reserv.db"))
    } else {
        Ok(default_data_dir()?.join("reserv.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = StoreConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_with_busy_timeout() {
        let config =
            StoreConfig::new("/tmp/test.db").with_busy_timeout(Duration::from_millis(10000));
        assert_eq!(config.busy_timeout, Duration::from_millis(10000));
    }

    #[test]
    fn test_config_read_only() {
        let config = StoreConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    fn test_default_data_dir() {
        // This test requires HOME or USERPROFILE to be set
        let result = default_data_dir();
        if std::env::var("HOME").is_ok() || std::env::var("USERPROFILE").is_ok() {
            let dir = result.unwrap();
            assert!(dir.ends_with(".reserv"));
        }
    }

    #[test]
    fn test_resolve_store_path() {
        // Test with default (no RESERV_DATA_DIR set)
        std::env::remove_var("RESERV_DATA_DIR");
        let result = resolve_store_path();
        if std::env::var("HOME").is_ok() || std::env::var("USERPROFILE").is_ok() {
            let path = result.unwrap();
            assert!(path.ends_with("reserv.db"));
        }

        // Test with RESERV_DATA_DIR set
        std::env::set_var("RESERV_DATA_DIR", "/custom/data");
        let path = resolve_store_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/data/reserv.db"));

        // Clean up
        std::env::remove_var("RESERV_DATA_DIR");
    }
}
