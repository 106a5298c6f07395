//! Resource record type.
//!
//! A [`Resource`] is a reservable physical or logical asset identified by a
//! store-assigned integer id, with a display name and a descriptive
//! location. Records are values: the service layer operates on resources
//! passed in and returned out per call, and the store owns persistence.

use serde::{Deserialize, Serialize};

/// A reservable named and located entity.
///
/// The id is assigned by the store when the record is first persisted and
/// is immutable thereafter. Name and location are guaranteed non-empty for
/// any record that passed through the service layer.
///
/// # Examples
///
/// ```
/// use reserv::Resource;
///
/// let resource = Resource::new(1, "Conference room A", "Building 2, floor 3");
/// assert_eq!(resource.id(), 1);
/// assert_eq!(resource.name(), "Conference room A");
/// assert_eq!(resource.location(), "Building 2, floor 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    id: i64,
    name: String,
    location: String,
}

impl Resource {
    /// Creates a resource record with the given identity and fields.
    ///
    /// This constructor does not validate the fields; validation against
    /// empty name/location happens at the service boundary, where failures
    /// are reported as faults.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
        }
    }

    /// Returns the store-assigned identity.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the descriptive location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns a copy of this record with new field values and the same id.
    ///
    /// Useful for preparing a full-record update.
    ///
    /// # Examples
    ///
    /// ```
    /// use reserv::Resource;
    ///
    /// let original = Resource::new(1, "Room A", "Floor 1");
    /// let renamed = original.with_fields("Room B", "Floor 2");
    /// assert_eq!(renamed.id(), 1);
    /// assert_eq!(renamed.name(), "Room B");
    /// ```
    #[must_use]
    pub fn with_fields(&self, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            location: location.into(),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at {}", self.name, self.id, self.location)
    }
}
