//! Resource service contract and implementation.
//!
//! [`ResourceService`] is the business-facing contract for managing
//! resource records: create, full-record update, fetch by id, and list.
//! [`ResourceManager`] implements it over any [`ResourceStore`], keeping
//! the persistence technology swappable.
//!
//! Every error leaving this layer is a fault: validation and write-miss
//! conditions are raised with their dedicated codes, and unexpected store
//! failures are translated to [`FaultCode::InternalError`] carrying the
//! underlying message. A read miss is a normal outcome, not an error.
//!
//! # Examples
//!
//! ```
//! use reserv::service::{ResourceManager, ResourceService};
//! use reserv::store::MemoryStore;
//!
//! let mut service = ResourceManager::new(MemoryStore::new());
//!
//! let resource = service.create_resource("Conference room A", "Building 2").unwrap();
//! assert_eq!(service.get_resource(resource.id()).unwrap(), Some(resource));
//! ```

use crate::error::{Error, Result};
use crate::fault::{raise_fault, FaultCode};
use crate::messages::{invalid_field_message, nonexistent_resource_id_message};
use crate::store::ResourceStore;
use crate::Resource;

/// Business-facing contract for managing resource records.
///
/// Stateless request/response semantics: each operation runs to completion
/// and the only state lives in the backing store.
pub trait ResourceService {
    /// Constructs and persists a new resource.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidField` fault when `name` or `location` is empty,
    /// or an `InternalError` fault when the store fails.
    fn create_resource(&mut self, name: &str, location: &str) -> Result<Resource>;

    /// Persists a full replacement of an existing record.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidField` fault when the replacement's name or
    /// location is empty, a `NonexistentResourceId` fault when no record
    /// with the resource's id exists, or an `InternalError` fault when the
    /// store fails.
    fn update_resource(&mut self, resource: &Resource) -> Result<Resource>;

    /// Returns the matching record, or `None` when the id is unknown.
    ///
    /// A read miss is an explicit empty result, never a fault.
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` fault when the store fails.
    fn get_resource(&self, id: i64) -> Result<Option<Resource>>;

    /// Returns all records, in the store's stable order.
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` fault when the store fails.
    fn get_resources(&self) -> Result<Vec<Resource>>;
}

/// [`ResourceService`] implementation over a [`ResourceStore`].
#[derive(Debug)]
pub struct ResourceManager<S> {
    store: S,
}

impl<S: ResourceStore> ResourceManager<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the service and returns the backing store.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Validates that a required field is non-empty.
///
/// The exact field name is echoed into the fault description.
fn validate_required_field(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(raise_fault(
            FaultCode::InvalidField,
            invalid_field_message(field),
        ));
    }
    Ok(())
}

/// Re-raises a store failure as a uniform fault.
///
/// Faults raised below pass through untouched; anything else becomes an
/// `InternalError` fault carrying the underlying message text, so callers
/// never see a raw store error.
fn translate_store_error(err: Error) -> Error {
    match err {
        Error::Fault { .. } => err,
        other => raise_fault(FaultCode::InternalError, other.to_string()),
    }
}

impl<S: ResourceStore> ResourceService for ResourceManager<S> {
    fn create_resource(&mut self, name: &str, location: &str) -> Result<Resource> {
        validate_required_field("name", name)?;
        validate_required_field("location", location)?;

        let resource = self
            .store
            .insert_resource(name, location)
            .map_err(translate_store_error)?;

        log::debug!("created resource {} ({})", resource.id(), resource.name());
        Ok(resource)
    }

    fn update_resource(&mut self, resource: &Resource) -> Result<Resource> {
        validate_required_field("name", resource.name())?;
        validate_required_field("location", resource.location())?;

        let replaced = self
            .store
            .update_resource(resource)
            .map_err(translate_store_error)?;

        if !replaced {
            return Err(raise_fault(
                FaultCode::NonexistentResourceId,
                nonexistent_resource_id_message(resource.id()),
            ));
        }

        log::debug!("updated resource {}", resource.id());
        Ok(resource.clone())
    }

    fn get_resource(&self, id: i64) -> Result<Option<Resource>> {
        self.store.get_resource(id).map_err(translate_store_error)
    }

    fn get_resources(&self) -> Result<Vec<Resource>> {
        self.store.list_resources().map_err(translate_store_error)
    }
}
