//! Fault model and translation to typed errors.
//!
//! A [`ServiceFault`] pairs a machine-readable [`FaultCode`] with a
//! human-readable description. Faults are the only error shape callers of
//! the service layer ever see: validation failures, not-found conditions,
//! and translated lower-layer failures all arrive as [`Error::Fault`]
//! carrying one of these payloads.
//!
//! [`Error::Fault`]: crate::Error::Fault

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Classification of a service failure.
///
/// The member names form a stable wire vocabulary: faults serialize with the
/// code spelled exactly as the variant name, so variants must not be renamed
/// without a compatibility plan. New members may be added.
///
/// # Examples
///
/// ```
/// use reserv::FaultCode;
///
/// let code = FaultCode::InvalidField;
/// assert_eq!(format!("{code}"), "InvalidField");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultCode {
    /// A request field failed validation.
    InvalidField,
    /// The referenced reservation type does not exist.
    InvalidReservationType,
    /// The reservation time range is invalid.
    InvalidTimeRange,
    /// No user exists with the given id.
    NonexistentUserId,
    /// No user exists with the given username.
    NonexistentUsername,
    /// No resource exists with the given id.
    NonexistentResourceId,
    /// A lower-layer failure was translated at the service boundary.
    InternalError,
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidField => "InvalidField",
            Self::InvalidReservationType => "InvalidReservationType",
            Self::InvalidTimeRange => "InvalidTimeRange",
            Self::NonexistentUserId => "NonexistentUserId",
            Self::NonexistentUsername => "NonexistentUsername",
            Self::NonexistentResourceId => "NonexistentResourceId",
            Self::InternalError => "InternalError",
        };
        write!(f, "{name}")
    }
}

/// A classified, described failure condition surfaced to a caller.
///
/// The description is always present; a fault built without a message
/// carries the empty string rather than an absent value. Serializes as
/// `{ "code": <FaultCode name>, "description": <string> }`.
///
/// # Examples
///
/// ```
/// use reserv::{FaultCode, ServiceFault};
///
/// let fault = ServiceFault::new(FaultCode::InvalidField, "name field is invalid!");
/// assert_eq!(fault.code, FaultCode::InvalidField);
/// assert_eq!(fault.description, "name field is invalid!");
///
/// let bare = ServiceFault::bare(FaultCode::InternalError);
/// assert_eq!(bare.description, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFault {
    /// The failure classification.
    pub code: FaultCode,
    /// Human-readable description, empty when no message was supplied.
    pub description: String,
}

impl ServiceFault {
    /// Creates a fault with the given code and description.
    #[must_use]
    pub fn new(code: FaultCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    /// Creates a fault with an empty description.
    #[must_use]
    pub fn bare(code: FaultCode) -> Self {
        Self {
            code,
            description: String::new(),
        }
    }
}

impl fmt::Display for ServiceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.description)
        }
    }
}

/// Builds a typed error carrying a [`ServiceFault`].
///
/// The returned error's `Display` output equals the supplied message, and
/// its structured payload pairs the message with the given code.
///
/// # Examples
///
/// ```
/// use reserv::{raise_fault, FaultCode};
///
/// let err = raise_fault(FaultCode::InvalidField, "name field is invalid!");
/// let fault = err.fault().unwrap();
/// assert_eq!(fault.code, FaultCode::InvalidField);
/// assert_eq!(format!("{err}"), "name field is invalid!");
/// ```
#[must_use]
pub fn raise_fault(code: FaultCode, message: impl Into<String>) -> Error {
    Error::Fault {
        fault: ServiceFault::new(code, message),
    }
}

/// Builds a typed error from an underlying failure, using the failure's
/// rendered message as the fault description.
///
/// # Examples
///
/// ```
/// use reserv::{raise_fault_from, FaultCode};
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk unplugged");
/// let err = raise_fault_from(FaultCode::InternalError, &io);
/// assert_eq!(err.fault().unwrap().description, "disk unplugged");
/// ```
#[must_use]
pub fn raise_fault_from<E: std::error::Error>(code: FaultCode, source: &E) -> Error {
    raise_fault(code, source.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_code_display_matches_variant_name() {
        assert_eq!(format!("{}", FaultCode::InvalidField), "InvalidField");
        assert_eq!(
            format!("{}", FaultCode::NonexistentResourceId),
            "NonexistentResourceId"
        );
        assert_eq!(format!("{}", FaultCode::InternalError), "InternalError");
    }

    #[test]
    fn test_fault_code_serializes_by_name() {
        let json = serde_json::to_string(&FaultCode::InvalidTimeRange).unwrap();
        assert_eq!(json, "\"InvalidTimeRange\"");

        let parsed: FaultCode = serde_json::from_str("\"NonexistentUsername\"").unwrap();
        assert_eq!(parsed, FaultCode::NonexistentUsername);
    }

    #[test]
    fn test_service_fault_new() {
        let fault = ServiceFault::new(FaultCode::InvalidField, "name field is invalid!");
        assert_eq!(fault.code, FaultCode::InvalidField);
        assert_eq!(fault.description, "name field is invalid!");
    }

    #[test]
    fn test_service_fault_bare_has_empty_description() {
        let fault = ServiceFault::bare(FaultCode::NonexistentUserId);
        assert_eq!(fault.description, "");
    }

    #[test]
    fn test_service_fault_wire_shape() {
        let fault = ServiceFault::new(FaultCode::InvalidField, "name field is invalid!");
        let json = serde_json::to_value(&fault).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "InvalidField",
                "description": "name field is invalid!",
            })
        );
    }

    #[test]
    fn test_service_fault_display() {
        let fault = ServiceFault::new(FaultCode::InvalidTimeRange, "check field starts_at");
        assert_eq!(format!("{fault}"), "InvalidTimeRange: check field starts_at");

        let bare = ServiceFault::bare(FaultCode::InternalError);
        assert_eq!(format!("{bare}"), "InternalError");
    }

    #[test]
    fn test_raise_fault_carries_payload() {
        let err = raise_fault(FaultCode::InvalidField, "name field is invalid!");
        let fault = err.fault().expect("should carry a fault");
        assert_eq!(fault.code, FaultCode::InvalidField);
        assert_eq!(fault.description, "name field is invalid!");
    }

    #[test]
    fn test_raise_fault_display_equals_message() {
        let err = raise_fault(FaultCode::NonexistentResourceId, "no such resource");
        assert_eq!(format!("{err}"), "no such resource");
    }

    #[test]
    fn test_raise_fault_empty_message() {
        let err = raise_fault(FaultCode::InternalError, "");
        assert_eq!(err.fault().unwrap().description, "");
        assert_eq!(format!("{err}"), "");
    }

    #[test]
    fn test_raise_fault_from_uses_source_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "store gone");
        let err = raise_fault_from(FaultCode::InternalError, &io);
        assert_eq!(err.fault().unwrap().code, FaultCode::InternalError);
        assert_eq!(err.fault().unwrap().description, "store gone");
    }
}
