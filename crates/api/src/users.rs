// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The user administration screen.
//!
//! User management is stricter than content management: adding accounts,
//! assigning roles, and deleting accounts are admin-only, where content
//! screens extend their mutations to the controller role.

use crate::auth::{AdminAction, Session};
use crate::capabilities::UserAdminCapabilities;
use crate::error::{ApiError, translate_domain_error};
use crate::notify::{Notification, Notifier};
use crate::screen::ManagementScreen;
use guide_admin_domain::{
    EntityId, ManagedUser, Role, validate_display_name, validate_entity_id,
};
use time::OffsetDateTime;

/// The admin-only account management screen.
#[derive(Debug, Clone)]
pub struct UserAdminScreen {
    screen: ManagementScreen<ManagedUser>,
}

impl UserAdminScreen {
    /// Creates the screen for the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            screen: ManagementScreen::new(session, "User"),
        }
    }

    /// Returns the underlying management screen.
    ///
    /// Search, edit mode, and load state are shared with the content
    /// screens; only the mutations below differ.
    #[must_use]
    pub const fn screen(&self) -> &ManagementScreen<ManagedUser> {
        &self.screen
    }

    /// Returns the underlying management screen mutably.
    pub const fn screen_mut(&mut self) -> &mut ManagementScreen<ManagedUser> {
        &mut self.screen
    }

    /// Returns the capability flags for the session's role.
    #[must_use]
    pub fn capabilities(&self) -> UserAdminCapabilities {
        UserAdminCapabilities::for_role(self.screen.session().role())
    }

    /// Adds a user account.
    ///
    /// Returns `Ok(false)` when the id collides with an existing account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below admin, or
    /// `ApiError::InvalidInput` for an empty id or display name. Nothing
    /// is mutated in either case.
    pub fn add_user(
        &mut self,
        user: ManagedUser,
        notifier: &mut dyn Notifier,
    ) -> Result<bool, ApiError> {
        self.screen.guard(AdminAction::AddUser, notifier)?;

        if let Err(err) =
            validate_entity_id(&user.id).and_then(|()| validate_display_name(&user.name))
        {
            let api_err: ApiError = translate_domain_error(err);
            notifier.notify(Notification::error(api_err.to_string()));
            return Err(api_err);
        }

        let inserted: bool = self.screen.store_mut().insert(user);
        if inserted {
            notifier.notify(Notification::success("User added successfully!"));
        } else {
            tracing::debug!("duplicate user id insert ignored");
        }
        Ok(inserted)
    }

    /// Assigns a role to an existing account.
    ///
    /// The account's `updated_at` is stamped with the current date.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below admin, or
    /// `ApiError::ResourceNotFound` when the account has vanished.
    pub fn assign_role(
        &mut self,
        id: &EntityId,
        role: Role,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ApiError> {
        self.screen.guard(AdminAction::AssignRole, notifier)?;

        let Some(existing) = self.screen.get(id) else {
            tracing::debug!(%id, "role assignment on vanished account refused");
            let err: ApiError = ApiError::ResourceNotFound {
                resource_type: String::from("User"),
                message: format!("User with id '{id}' does not exist"),
            };
            notifier.notify(Notification::error(err.to_string()));
            return Err(err);
        };

        let mut updated: ManagedUser = existing.clone();
        updated.role = role;
        updated.updated_at = Some(OffsetDateTime::now_utc().date());
        self.screen.store_mut().replace(updated);

        notifier.notify(Notification::success("User role updated successfully!"));
        Ok(())
    }

    /// Deletes a user account.
    ///
    /// A vanished account is a no-op (`Ok(false)`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below admin;
    /// nothing is mutated in that case.
    pub fn delete_user(
        &mut self,
        id: &EntityId,
        notifier: &mut dyn Notifier,
    ) -> Result<bool, ApiError> {
        self.screen.guard(AdminAction::DeleteUser, notifier)?;

        let removed: bool = self.screen.store_mut().remove(id);
        if removed {
            notifier.notify(Notification::success("User deleted successfully!"));
        } else {
            tracing::debug!(%id, "delete on vanished account ignored");
        }
        Ok(removed)
    }
}
