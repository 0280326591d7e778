// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record with this identifier already exists in the collection.
    DuplicateEntityId {
        /// The colliding identifier.
        id: String,
    },
    /// No record with this identifier exists in the collection.
    EntityNotFound {
        /// The missing identifier.
        id: String,
    },
    /// A status string is not a member of the variant's enum.
    InvalidStatus {
        /// The rejected status string.
        status: String,
    },
    /// A status transition violates the lifecycle rules.
    StatusTransitionBlocked {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is blocked.
        reason: String,
    },
    /// An entity identifier is empty or invalid.
    InvalidEntityId(String),
    /// A display name is empty or invalid.
    InvalidDisplayName(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntityId { id } => {
                write!(f, "Record with id '{id}' already exists")
            }
            Self::EntityNotFound { id } => {
                write!(f, "Record with id '{id}' not found")
            }
            Self::InvalidStatus { status } => {
                write!(f, "Invalid status: '{status}'")
            }
            Self::StatusTransitionBlocked { from, to, reason } => {
                write!(f, "Cannot change status from '{from}' to '{to}': {reason}")
            }
            Self::InvalidEntityId(msg) => write!(f, "Invalid entity id: {msg}"),
            Self::InvalidDisplayName(msg) => write!(f, "Invalid display name: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
