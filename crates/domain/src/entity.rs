// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The common shape shared by every administrable record.
//!
//! Each management screen operates on one entity variant. The traits here
//! are what lets a single parametrized screen replace the per-variant
//! copies: identity for the store, searchable text for the filter, and a
//! constrained status enum for the transition engine.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// An opaque, stable identifier for one record within a collection.
///
/// Identifiers are unique within their collection and are never reused
/// after deletion within a session. The backing representation is a string;
/// numeric backend keys are carried as their decimal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new identifier from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// One administrable record under management.
pub trait Entity {
    /// Returns the stable identifier for this record.
    fn id(&self) -> &EntityId;

    /// Returns the ordered list of text attributes the filter engine
    /// matches against.
    ///
    /// Absent optional fields must be rendered as the empty string so that
    /// matching never panics on missing data.
    fn searchable_fields(&self) -> Vec<&str>;
}

/// A value drawn from a fixed status enum.
///
/// Status values know which transitions are legal from themselves. Most
/// variants have an unconstrained graph; the renewal variant gates the
/// transition to `Renewed` on eligibility.
pub trait StatusValue: Copy + Eq + std::fmt::Debug {
    /// Returns the wire/display string for this status.
    fn as_str(&self) -> &'static str;

    /// Returns whether a transition from this status to `requested` is
    /// permitted by the status lifecycle rules.
    fn transition_allowed(self, requested: Self) -> bool;

    /// Validates a transition, producing a descriptive error when blocked.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StatusTransitionBlocked` if the transition is
    /// not permitted.
    fn validate_transition(self, requested: Self) -> Result<(), DomainError> {
        if self.transition_allowed(requested) {
            Ok(())
        } else {
            Err(DomainError::StatusTransitionBlocked {
                from: self.as_str().to_string(),
                to: requested.as_str().to_string(),
                reason: String::from("transition not permitted by status lifecycle rules"),
            })
        }
    }
}

/// An entity carrying a constrained status enum.
pub trait StatusEntity: Entity {
    /// The status enum for this entity variant.
    type Status: StatusValue;

    /// Returns the current status.
    fn status(&self) -> Self::Status;

    /// Replaces the status in place.
    ///
    /// Callers are expected to have validated the transition; this is a
    /// plain field write.
    fn set_status(&mut self, status: Self::Status);
}
