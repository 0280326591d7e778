// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The generic management screen.
//!
//! Course, mentor programme, recommended course, license, and user
//! administration all repeat the same shape: a fetched collection, a
//! search query over configured text fields, an edit-mode toggle that
//! reveals destructive affordances, and role-gated mutations. This one
//! parametrized type replaces those per-entity copies.
//!
//! Mutations are local-optimistic: they apply to the in-memory store and
//! are not written back to the data collaborator. See DESIGN.md.

use crate::auth::{AdminAction, AuthorizationService, Session};
use crate::capabilities::ScreenCapabilities;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::notify::{Notification, Notifier};
use crate::source::{DataSource, LoadState};
use guide_admin::{EditMode, EntityStore, SelectionSet, filter_view};
use guide_admin_domain::{Entity, EntityId, StatusEntity, validate_entity_id};

/// One management screen over a single entity collection.
#[derive(Debug, Clone)]
pub struct ManagementScreen<E: Entity + Clone> {
    session: Session,
    noun: &'static str,
    store: EntityStore<E>,
    query: String,
    mode: EditMode,
    selection: SelectionSet,
    load: LoadState,
}

impl<E: Entity + Clone> ManagementScreen<E> {
    /// Creates a screen for the given session.
    ///
    /// `noun` names the entity in user-facing messages ("Course",
    /// "Renewal record", "User"). The screen starts read-only with an
    /// empty query, an empty selection, and a pending load.
    #[must_use]
    pub fn new(session: Session, noun: &'static str) -> Self {
        Self {
            session,
            noun,
            store: EntityStore::new(),
            query: String::new(),
            mode: EditMode::ReadOnly,
            selection: SelectionSet::new(),
            load: LoadState::Loading,
        }
    }

    /// Returns the injected session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Replaces the session on auth state change.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// Returns the capability flags for the session's role.
    #[must_use]
    pub fn capabilities(&self) -> ScreenCapabilities {
        ScreenCapabilities::for_role(self.session.role())
    }

    /// Returns the per-section load state.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Performs the one fetch for this screen's mount.
    ///
    /// A failed fetch leaves the store untouched and parks the failure in
    /// the load state for this section only.
    pub async fn load_from<S>(&mut self, source: &S)
    where
        S: DataSource<Record = E>,
    {
        self.load = LoadState::Loading;
        match source.fetch().await {
            Ok(records) => {
                self.store.load(records);
                self.load = LoadState::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "section load failed");
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    /// Loads records that were fetched and flattened by the caller.
    pub fn load_records(&mut self, records: Vec<E>) {
        self.store.load(records);
        self.load = LoadState::Ready;
    }

    /// Returns the full collection.
    #[must_use]
    pub fn records(&self) -> &[E] {
        self.store.records()
    }

    /// Returns the record with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&E> {
        self.store.get(id)
    }

    /// Returns the current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the search query; the filtered view recomputes on read.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clears the search query.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Returns the filtered view for the current query.
    #[must_use]
    pub fn filtered(&self) -> Vec<E> {
        filter_view(self.store.records(), &self.query)
    }

    /// Returns the current edit mode.
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Toggles between read-only and edit mode.
    ///
    /// The toggle itself is unconditional. Leaving edit mode clears the
    /// selection; screens with a pending bulk operation flush it first
    /// (see `RenewalSection::finish_editing`).
    pub fn toggle_edit(&mut self) -> EditMode {
        if self.mode.is_editing() {
            self.selection.clear();
        }
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Toggles one row's selection; returns whether it is now selected.
    pub fn toggle_select(&mut self, id: EntityId) -> bool {
        self.selection.toggle(id)
    }

    /// Selects every id in the current filtered view.
    ///
    /// Derived from the view at call time; call again after the view
    /// changes to re-derive.
    pub fn select_all_visible(&mut self) {
        let view: Vec<E> = self.filtered();
        self.selection.select_all(view.iter().map(Entity::id));
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Adds a record to the collection.
    ///
    /// Returns `Ok(false)` when the id collides with an existing record;
    /// the collision is ignored per the store's uniqueness invariant.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below controller,
    /// or `ApiError::InvalidInput` for an empty id. Either way nothing
    /// is mutated and the denial is surfaced through the notifier.
    pub fn add(&mut self, record: E, notifier: &mut dyn Notifier) -> Result<bool, ApiError> {
        self.guard(AdminAction::Add, notifier)?;

        if let Err(err) = validate_entity_id(record.id()) {
            let api_err: ApiError = translate_domain_error(err);
            notifier.notify(Notification::error(api_err.to_string()));
            return Err(api_err);
        }

        let inserted: bool = self.store.insert(record);
        if inserted {
            notifier.notify(Notification::success(format!(
                "{} added successfully!",
                self.noun
            )));
        } else {
            tracing::debug!("duplicate id insert ignored");
        }
        Ok(inserted)
    }

    /// Deletes the record with the given id.
    ///
    /// A vanished row is a defensive no-op (`Ok(false)`), never a crash.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below controller;
    /// nothing is mutated and the denial is surfaced through the
    /// notifier.
    pub fn delete(&mut self, id: &EntityId, notifier: &mut dyn Notifier) -> Result<bool, ApiError> {
        self.guard(AdminAction::Delete, notifier)?;

        let removed: bool = self.store.remove(id);
        if removed {
            notifier.notify(Notification::success(format!(
                "{} deleted successfully!",
                self.noun
            )));
        } else {
            tracing::debug!(%id, "delete on vanished row ignored");
        }
        Ok(removed)
    }

    pub(crate) fn guard(
        &self,
        action: AdminAction,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ApiError> {
        match AuthorizationService::authorize(action, self.session.role()) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(
                    action = action.as_str(),
                    role = %self.session.role(),
                    "permission denied"
                );
                notifier.notify(Notification::error(err.to_string()));
                Err(ApiError::from(err))
            }
        }
    }

    pub(crate) fn store_mut(&mut self) -> &mut EntityStore<E> {
        &mut self.store
    }

    pub(crate) const fn parts_mut(&mut self) -> (&mut EntityStore<E>, &SelectionSet) {
        (&mut self.store, &self.selection)
    }
}

impl<E: StatusEntity + Clone> ManagementScreen<E> {
    /// Replaces the status of one record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below controller,
    /// `ApiError::ResourceNotFound` for a vanished row, or
    /// `ApiError::ValidationRejected` when the transition violates the
    /// status lifecycle (the renewal eligibility gate). The record is
    /// left unchanged in every failure case.
    pub fn update_status(
        &mut self,
        id: &EntityId,
        status: E::Status,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ApiError> {
        self.guard(AdminAction::EditStatus, notifier)?;

        match self.store.try_update_status(id, status) {
            Ok(()) => {
                notifier.notify(Notification::success("Status updated successfully!"));
                Ok(())
            }
            Err(err) => {
                let api_err: ApiError = translate_core_error(err);
                notifier.notify(Notification::error(api_err.to_string()));
                Err(api_err)
            }
        }
    }
}
