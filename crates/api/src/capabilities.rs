// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities expose what actions the signed-in role is permitted to
//! perform without leaking authorization internals. They are advisory
//! only and do not replace the per-action checks.

use crate::auth::{AdminAction, AuthorizationService};
use guide_admin_domain::Role;

/// Whether one action is available to the current role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Converts a boolean permission into a capability.
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    /// Returns whether the action is permitted.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Capability flags for a content management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCapabilities {
    /// Whether the add affordance is shown.
    pub can_add: Capability,
    /// Whether per-row delete affordances are shown in edit mode.
    pub can_delete: Capability,
    /// Whether status badges are interactive in edit mode.
    pub can_edit_status: Capability,
    /// Whether the send-license control is enabled.
    pub can_send_license: Capability,
}

impl ScreenCapabilities {
    /// Computes the capability flags for a role.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self {
            can_add: authorized(AdminAction::Add, role),
            can_delete: authorized(AdminAction::Delete, role),
            can_edit_status: authorized(AdminAction::EditStatus, role),
            can_send_license: authorized(AdminAction::SendLicense, role),
        }
    }
}

/// Capability flags for the user administration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAdminCapabilities {
    /// Whether the add-user affordance is shown.
    pub can_add_user: Capability,
    /// Whether role badges are interactive.
    pub can_assign_role: Capability,
    /// Whether per-row delete affordances are shown.
    pub can_delete_user: Capability,
}

impl UserAdminCapabilities {
    /// Computes the capability flags for a role.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self {
            can_add_user: authorized(AdminAction::AddUser, role),
            can_assign_role: authorized(AdminAction::AssignRole, role),
            can_delete_user: authorized(AdminAction::DeleteUser, role),
        }
    }
}

fn authorized(action: AdminAction, role: Role) -> Capability {
    Capability::from_bool(AuthorizationService::authorize(action, role).is_ok())
}
