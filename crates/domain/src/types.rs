// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The effective role of the signed-in actor.
///
/// Roles are derived from freeform session metadata at the auth boundary
/// and normalized into this closed set; raw strings never travel past it.
/// An absent or unrecognized role is treated as the lowest privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative authority, including user and role management.
    Admin,
    /// Content and license authority, plus license dispatch.
    Controller,
    /// A signed-in park guide with no administrative authority.
    User,
    /// No session, or a session with unrecognized role metadata.
    #[default]
    Guest,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Controller => "controller",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }

    /// Normalizes raw session metadata into a role.
    ///
    /// The metadata value is trimmed and lowercased before matching.
    /// Anything that is not a known role, including an absent value,
    /// falls back to `Guest`.
    #[must_use]
    pub fn from_metadata(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Guest;
        };
        match raw.trim().to_lowercase().as_str() {
            "admin" => Self::Admin,
            "controller" => Self::Controller,
            "user" => Self::User,
            _ => Self::Guest,
        }
    }

    /// Returns whether this role carries any administrative authority.
    #[must_use]
    pub const fn is_administrative(&self) -> bool {
        matches!(self, Self::Admin | Self::Controller)
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_metadata(Some(s)))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A training course offered on the platform.
///
/// Instructor fields are denormalized from the joined instructor record
/// at fetch time and may be absent when no instructor is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// The stable identifier.
    pub id: EntityId,
    /// The course title.
    pub course_name: String,
    /// The course description.
    pub course_description: String,
    /// The assigned instructor's display name, if any.
    pub instructor_name: Option<String>,
    /// The assigned instructor's image URL, if any.
    pub instructor_image: Option<String>,
    /// Creation timestamp, display-only.
    pub created_at: Option<Date>,
}

impl Entity for Course {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            &self.course_name,
            &self.course_description,
            self.instructor_name.as_deref().unwrap_or(""),
        ]
    }
}

/// A mentorship programme pairing trainee guides with mentors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorProgram {
    /// The stable identifier.
    pub id: EntityId,
    /// The programme title.
    pub programme_name: String,
    /// The programme description.
    pub description: String,
    /// The mentor's display name, if assigned.
    pub mentor_name: Option<String>,
    /// Creation timestamp, display-only.
    pub created_at: Option<Date>,
}

impl Entity for MentorProgram {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            &self.programme_name,
            &self.description,
            self.mentor_name.as_deref().unwrap_or(""),
        ]
    }
}

/// A course surfaced by the external recommendation service.
///
/// The recommendation algorithm lives on a remote server; this record is
/// only the administrable listing of what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedCourse {
    /// The stable identifier.
    pub id: EntityId,
    /// The course title.
    pub course_name: String,
    /// The course description.
    pub description: String,
    /// The guide segment this recommendation targets, if any.
    pub recommended_for: Option<String>,
    /// Creation timestamp, display-only.
    pub created_at: Option<Date>,
}

impl Entity for RecommendedCourse {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            &self.course_name,
            &self.description,
            self.recommended_for.as_deref().unwrap_or(""),
        ]
    }
}

/// A platform account under role management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    /// The stable identifier.
    pub id: EntityId,
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's job designation.
    pub designation: String,
    /// The user's effective role.
    pub role: Role,
    /// Creation timestamp, display-only.
    pub created_at: Date,
    /// Last modification timestamp, stamped on role changes.
    pub updated_at: Option<Date>,
}

impl Entity for ManagedUser {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.email,
            &self.designation,
            self.role.as_str(),
        ]
    }
}
