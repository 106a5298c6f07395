//! In-memory store implementation.
//!
//! [`MemoryStore`] keeps resource and action records in ordered maps with
//! monotonically assigned identities. It implements the same store traits
//! as the SQLite [`Database`](super::Database) and is the implementation of
//! choice for service-layer tests and short-lived embedders.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::{Action, Resource};

use super::{ActionStore, ResourceStore};

/// An in-memory implementation of [`ResourceStore`] and [`ActionStore`].
///
/// Identities are assigned from per-entity counters and never reused within
/// a store instance, matching the SQLite implementation's behavior.
///
/// # Examples
///
/// ```
/// use reserv::store::{MemoryStore, ResourceStore};
///
/// let mut store = MemoryStore::new();
/// let resource = store.insert_resource("Room A", "Floor 1").unwrap();
/// assert_eq!(store.get_resource(resource.id()).unwrap(), Some(resource));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    resources: BTreeMap<i64, Resource>,
    actions: BTreeMap<i64, Action>,
    next_resource_id: i64,
    next_action_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
            actions: BTreeMap::new(),
            next_resource_id: 1,
            next_action_id: 1,
        }
    }
}

impl ResourceStore for MemoryStore {
    fn insert_resource(&mut self, name: &str, location: &str) -> Result<Resource> {
        let id = self.next_resource_id;
        self.next_resource_id += 1;

        let resource = Resource::new(id, name, location);
        self.resources.insert(id, resource.clone());
        Ok(resource)
    }

    fn get_resource(&self, id: i64) -> Result<Option<Resource>> {
        Ok(self.resources.get(&id).cloned())
    }

    fn update_resource(&mut self, resource: &Resource) -> Result<bool> {
        match self.resources.get_mut(&resource.id()) {
            Some(slot) => {
                *slot = resource.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list_resources(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.values().cloned().collect())
    }
}

impl ActionStore for MemoryStore {
    fn insert_action(&mut self, action: &Action) -> Result<Action> {
        let id = self.next_action_id;
        self.next_action_id += 1;

        let stored = action.with_id(id);
        self.actions.insert(id, stored.clone());
        Ok(stored)
    }

    fn get_action(&self, id: i64) -> Result<Option<Action>> {
        Ok(self.actions.get(&id).cloned())
    }

    fn update_action(&mut self, action: &Action) -> Result<bool> {
        match self.actions.get_mut(&action.id()) {
            Some(slot) => {
                *slot = action.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_action(&mut self, id: i64) -> Result<bool> {
        Ok(self.actions.remove(&id).is_some())
    }

    fn list_actions(&self) -> Result<Vec<Action>> {
        Ok(self.actions.values().cloned().collect())
    }
}
