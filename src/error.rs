//! Error types for the reserv library.
//!
//! This module provides the error hierarchy for all operations in the
//! library, using `thiserror` for ergonomic error handling. Errors that
//! cross the service boundary carry a structured [`ServiceFault`] payload.

use thiserror::Error;

use crate::fault::{FaultCode, ServiceFault};

/// Result type alias for operations that may fail with a reserv error.
///
/// # Examples
///
/// ```
/// use reserv::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the reserv library.
#[derive(Debug, Error)]
pub enum Error {
    /// A classified service fault. This is the only variant callers of the
    /// service layer observe; the display text is the fault description.
    #[error("{}", fault.description)]
    Fault {
        /// The structured fault payload.
        fault: ServiceFault,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred below the service boundary.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Returns the structured fault payload, if this error carries one.
    ///
    /// # Examples
    ///
    /// ```
    /// use reserv::{raise_fault, FaultCode};
    ///
    /// let err = raise_fault(FaultCode::InvalidField, "name field is invalid!");
    /// assert!(err.fault().is_some());
    /// ```
    #[must_use]
    pub fn fault(&self) -> Option<&ServiceFault> {
        match self {
            Self::Fault { fault } => Some(fault),
            _ => None,
        }
    }

    /// Check whether this error is a fault with the given code.
    ///
    /// # Examples
    ///
    /// ```
    /// use reserv::{raise_fault, FaultCode};
    ///
    /// let err = raise_fault(FaultCode::NonexistentResourceId, "gone");
    /// assert!(err.is_fault(FaultCode::NonexistentResourceId));
    /// assert!(!err.is_fault(FaultCode::InvalidField));
    /// ```
    #[must_use]
    pub fn is_fault(&self, code: FaultCode) -> bool {
        matches!(self, Self::Fault { fault } if fault.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::raise_fault;

    #[test]
    fn test_fault_error_display_is_description() {
        let err = Error::Fault {
            fault: ServiceFault::new(FaultCode::InvalidField, "name field is invalid!"),
        };
        assert_eq!(format!("{err}"), "name field is invalid!");
    }

    #[test]
    fn test_fault_accessor() {
        let err = raise_fault(FaultCode::InvalidTimeRange, "bad range");
        let fault = err.fault().unwrap();
        assert_eq!(fault.code, FaultCode::InvalidTimeRange);

        let other: Error = std::io::Error::new(std::io::ErrorKind::Other, "io").into();
        assert!(other.fault().is_none());
    }

    #[test]
    fn test_is_fault() {
        let err = raise_fault(FaultCode::NonexistentUserId, "no user");
        assert!(err.is_fault(FaultCode::NonexistentUserId));
        assert!(!err.is_fault(FaultCode::InternalError));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = Error::Validation {
            field: "schema_version".to_string(),
            message: "must be a number".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("schema_version"));
    }

    #[test]
    fn test_unsupported_schema_version_display() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i64> {
            Err(raise_fault(FaultCode::InternalError, "test"))
        }

        assert!(returns_result().is_err());
    }
}
