// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session derivation and authorization.
//!
//! The session is owned by the external auth collaborator; this module
//! only normalizes its freeform metadata into a closed role and decides,
//! per action, whether that role is sufficient. Denials are never silent:
//! every gated entry point surfaces them to the initiating UI context.

use crate::error::AuthError;
use guide_admin_domain::Role;

/// A read-only view of the authenticated session.
///
/// Set on auth state change, replaced wholesale, never mutated by the
/// management core. An absent session is represented as a guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The signed-in user's display name.
    pub user_name: String,
    /// The normalized effective role.
    pub role: Role,
}

impl Session {
    /// Creates a session with an already-normalized role.
    #[must_use]
    pub const fn new(user_name: String, role: Role) -> Self {
        Self { user_name, role }
    }

    /// Builds a session from raw auth metadata.
    ///
    /// The role string is trimmed and lowercased; unknown or absent roles
    /// fall back to guest. A missing display name falls back to "Admin",
    /// matching the header rendering default.
    #[must_use]
    pub fn from_metadata(first_name: Option<&str>, role: Option<&str>) -> Self {
        Self {
            user_name: first_name.unwrap_or("Admin").to_string(),
            role: Role::from_metadata(role),
        }
    }

    /// Returns the guest session used when no one is signed in.
    #[must_use]
    pub fn guest() -> Self {
        Self::new(String::from("Guest"), Role::Guest)
    }

    /// Returns the session's effective role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// A mutating action subject to the permission gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    /// Add a content record (course, programme, license record).
    Add,
    /// Delete a content record.
    Delete,
    /// Edit the status of a status-bearing record.
    EditStatus,
    /// Dispatch a license or renewal license to a park guide.
    SendLicense,
    /// Create a platform account.
    AddUser,
    /// Change a platform account's role.
    AssignRole,
    /// Delete a platform account.
    DeleteUser,
}

impl AdminAction {
    /// Returns the action name used in denial messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::EditStatus => "edit_status",
            Self::SendLicense => "send_license",
            Self::AddUser => "add_user",
            Self::AssignRole => "assign_role",
            Self::DeleteUser => "delete_user",
        }
    }

    /// Returns the human-readable role requirement for this action.
    #[must_use]
    pub const fn required_role(&self) -> &'static str {
        match self {
            Self::Add | Self::Delete | Self::EditStatus => "admin or controller role",
            Self::SendLicense => "controller role",
            Self::AddUser | Self::AssignRole | Self::DeleteUser => "admin role",
        }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Content mutations are open to admins and controllers, license dispatch
/// is controller-only, and account administration is admin-only. Guests
/// and plain users can mutate nothing.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks whether a role may perform an action.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` with a human-readable requirement
    /// when the role is insufficient. The caller must surface this to the
    /// initiating UI context; no state may change on denial.
    pub fn authorize(action: AdminAction, role: Role) -> Result<(), AuthError> {
        let allowed: bool = match action {
            AdminAction::Add | AdminAction::Delete | AdminAction::EditStatus => {
                matches!(role, Role::Admin | Role::Controller)
            }
            AdminAction::SendLicense => matches!(role, Role::Controller),
            AdminAction::AddUser | AdminAction::AssignRole | AdminAction::DeleteUser => {
                matches!(role, Role::Admin)
            }
        };

        if allowed {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.as_str().to_string(),
                required_role: action.required_role().to_string(),
            })
        }
    }

    /// Checks whether a role may open an admin management screen at all.
    ///
    /// Mirrors the access check performed on screen mount; callers
    /// redirect denied roles away from the screen.
    #[must_use]
    pub fn can_access_admin(role: Role) -> bool {
        role.is_administrative()
    }
}
