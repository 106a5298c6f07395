#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # reserv
//!
//! A library for managing reservable resource and action records.
//!
//! This library provides the core of a reservation-management backend:
//! record types for reservable resources and audit actions, a
//! validation-driven fault model, and a service contract over swappable
//! persistence.
//!
//! ## Core Types
//!
//! - [`Resource`] and [`Action`]: managed record types
//! - [`FaultCode`] and [`ServiceFault`]: structured failure reporting
//! - [`ResourceService`] and [`ResourceManager`]: the business contract
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use reserv::service::{ResourceManager, ResourceService};
//! use reserv::store::MemoryStore;
//! use reserv::FaultCode;
//!
//! let mut service = ResourceManager::new(MemoryStore::new());
//!
//! // Create a resource
//! let room = service.create_resource("Conference room A", "Building 2").unwrap();
//!
//! // Validation failures arrive as typed faults
//! let err = service.create_resource("", "Building 2").unwrap_err();
//! assert!(err.is_fault(FaultCode::InvalidField));
//! assert_eq!(format!("{err}"), "name field is invalid!");
//! ```

pub mod action;
pub mod error;
pub mod fault;
pub mod logging;
pub mod messages;
pub mod resource;
pub mod service;
pub mod store;

// Re-export key types at crate root for convenience
pub use action::Action;
pub use error::{Error, Result};
pub use fault::{raise_fault, raise_fault_from, FaultCode, ServiceFault};
pub use logging::{init_logger, LogLevel, Logger};
pub use resource::Resource;
pub use service::{ResourceManager, ResourceService};
pub use store::{ActionStore, Database, MemoryStore, ResourceStore, StoreConfig};
