// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use guide_admin_domain::{DomainError, Entity, EntityId, StatusEntity, StatusValue};

/// The authoritative in-memory collection for one entity type.
///
/// The store is populated once per screen mount from the external data
/// collaborator and mutated only by local actions afterwards. Identifier
/// uniqueness holds at all times: duplicate inserts are ignored and
/// duplicate ids in a load payload are dropped, first occurrence wins.
///
/// Mutations cannot fail. Invariant violations (duplicate id, missing id,
/// blocked transition) degrade to no-ops and report `false`, keeping the
/// calling UI stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStore<E: Entity> {
    records: Vec<E>,
}

impl<E: Entity> EntityStore<E> {
    /// Creates a new empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Replaces the entire collection with a fresh load.
    ///
    /// No merge semantics: the last load wins. Records whose id collides
    /// with an earlier record in the same payload are dropped.
    pub fn load(&mut self, records: Vec<E>) {
        self.records.clear();
        for record in records {
            if !self.contains(record.id()) {
                self.records.push(record);
            }
        }
    }

    /// Appends a record.
    ///
    /// Returns `false` without modifying the collection when the id
    /// collides with an existing record.
    pub fn insert(&mut self, record: E) -> bool {
        if self.contains(record.id()) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Replaces the record carrying the same id, preserving its position.
    ///
    /// Returns `false` when no record with that id exists.
    pub fn replace(&mut self, record: E) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id.
    ///
    /// Returns `false` when no such record exists.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let before: usize = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    /// Returns the record with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Returns whether a record with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Returns the full collection in load/insert order.
    #[must_use]
    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<E: StatusEntity> EntityStore<E> {
    /// Replaces the status of the record with the given id.
    ///
    /// Returns `false` without modifying anything when the id is absent or
    /// the transition is not permitted by the status lifecycle rules.
    pub fn update_status(&mut self, id: &EntityId, status: E::Status) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        if !record.status().transition_allowed(status) {
            return false;
        }
        record.set_status(status);
        true
    }

    /// Replaces the status of the record with the given id, reporting why
    /// the update was refused.
    ///
    /// This is the UI-initiated path: unlike [`Self::update_status`], a
    /// vanished row or a blocked transition produces a descriptive error
    /// for the initiating context instead of a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is absent or the transition is not
    /// permitted by the status lifecycle rules.
    pub fn try_update_status(&mut self, id: &EntityId, status: E::Status) -> Result<(), CoreError> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return Err(CoreError::DomainViolation(DomainError::EntityNotFound {
                id: id.as_str().to_string(),
            }));
        };
        record.status().validate_transition(status)?;
        record.set_status(status);
        Ok(())
    }
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
