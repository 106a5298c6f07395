//! Action record type.
//!
//! An [`Action`] is an auditable record of an operation performed in the
//! system. Records are created and read through the action store; the kind
//! of operation is a required label, with optional free-form detail and a
//! timestamp captured at construction time.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// An auditable record of a tracked operation.
///
/// # Examples
///
/// ```
/// use reserv::Action;
///
/// let action = Action::builder("resource-created")
///     .detail(Some("Conference room A".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(action.kind(), "resource-created");
/// assert_eq!(action.detail(), Some("Conference room A"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    id: i64,
    kind: String,
    detail: Option<String>,
    recorded_at: SystemTime,
}

impl Action {
    /// Creates a new action builder for the given operation kind.
    ///
    /// The id defaults to zero until the store assigns one on insert.
    #[must_use]
    pub fn builder(kind: impl Into<String>) -> ActionBuilder {
        ActionBuilder {
            id: 0,
            kind: kind.into(),
            detail: None,
            recorded_at: None,
        }
    }

    /// Returns the store-assigned identity, or zero for an unpersisted record.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the operation kind label.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the optional free-form detail.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the timestamp at which the action was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> SystemTime {
        self.recorded_at
    }

    /// Returns a copy of this record with the given store-assigned id.
    ///
    /// Used by store implementations after an insert.
    #[must_use]
    pub fn with_id(&self, id: i64) -> Self {
        Self {
            id,
            kind: self.kind.clone(),
            detail: self.detail.clone(),
            recorded_at: self.recorded_at,
        }
    }
}

/// Builder for creating [`Action`] instances.
#[derive(Debug)]
pub struct ActionBuilder {
    id: i64,
    kind: String,
    detail: Option<String>,
    recorded_at: Option<SystemTime>,
}

impl ActionBuilder {
    /// Sets the store-assigned identity.
    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the optional detail text.
    ///
    /// The detail string will be trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail.map(|d| d.trim().to_string());
        self
    }

    /// Sets the recorded-at timestamp.
    #[must_use]
    pub fn recorded_at(mut self, recorded_at: SystemTime) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Builds the action record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The kind is empty after trimming whitespace
    /// - A detail was provided but is empty after trimming
    ///
    /// # Examples
    ///
    /// ```
    /// use reserv::Action;
    ///
    /// assert!(Action::builder("resource-updated").build().is_ok());
    /// assert!(Action::builder("  ").build().is_err());
    /// ```
    pub fn build(self) -> Result<Action, ValidationError> {
        let kind = self.kind.trim().to_string();
        if kind.is_empty() {
            return Err(ValidationError {
                field: "kind".into(),
                message: "kind must be non-empty after trimming whitespace".into(),
            });
        }

        if let Some(ref detail) = self.detail {
            if detail.is_empty() {
                return Err(ValidationError {
                    field: "detail".into(),
                    message: "detail must be non-empty after trimming whitespace".into(),
                });
            }
        }

        Ok(Action {
            id: self.id,
            kind,
            detail: self.detail,
            recorded_at: self.recorded_at.unwrap_or_else(SystemTime::now),
        })
    }
}

/// Error type for action validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for crate::error::Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}
