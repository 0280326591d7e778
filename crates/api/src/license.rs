// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The license administration screen.
//!
//! Two independent sections share the screen: approvals (unconstrained
//! status edits) and renewals (eligibility-gated, with bulk selection).
//! The renewal section flushes its pending bulk renewal when the user
//! leaves edit mode, so a selection is never silently discarded.

use crate::auth::{AdminAction, Session};
use crate::error::ApiError;
use crate::notify::{NoticeKind, Notification, Notifier};
use crate::screen::ManagementScreen;
use crate::source::{DataSource, LoadState};
use guide_admin::{EntityStore, RenewalReport, SelectionSet, renew_selected};
use guide_admin_domain::{
    ApprovalStatus, EntityId, LicenseApproval, LicenseRenewal, RenewalStatus,
};

/// Which license section a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseKind {
    /// An application awaiting approval.
    Approval,
    /// A license tracked for renewal.
    Renewal,
}

impl LicenseKind {
    /// Returns the user-facing name of this section's record type.
    #[must_use]
    pub const fn noun(&self) -> &'static str {
        match self {
            Self::Approval => "Approval record",
            Self::Renewal => "Renewal record",
        }
    }
}

/// The renewal section: a management screen whose edit mode carries a
/// pending bulk renewal.
#[derive(Debug, Clone)]
pub struct RenewalSection {
    screen: ManagementScreen<LicenseRenewal>,
}

impl RenewalSection {
    /// Creates the section for the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            screen: ManagementScreen::new(session, LicenseKind::Renewal.noun()),
        }
    }

    /// Returns the underlying management screen.
    #[must_use]
    pub const fn screen(&self) -> &ManagementScreen<LicenseRenewal> {
        &self.screen
    }

    /// Returns the underlying management screen mutably.
    ///
    /// Edit-mode exits must go through [`Self::finish_editing`] so the
    /// pending bulk renewal is flushed, not dropped.
    pub const fn screen_mut(&mut self) -> &mut ManagementScreen<LicenseRenewal> {
        &mut self.screen
    }

    /// Enters edit mode.
    ///
    /// Entering is unconditional; the permission check happens when the
    /// pending selection is applied on exit.
    pub fn start_editing(&mut self) {
        if !self.screen.mode().is_editing() {
            self.screen.toggle_edit();
        }
    }

    /// Leaves edit mode, applying the pending bulk renewal first.
    ///
    /// With a non-empty selection the selected records are partitioned by
    /// the eligibility gate, eligible ones move to `Renewed`, and the
    /// itemized summary goes to the notifier. The section always ends up
    /// read-only with a cleared selection, even on a permission denial.
    ///
    /// Returns the report when a bulk pass ran, `None` when there was
    /// nothing to flush.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below controller;
    /// no record is mutated in that case.
    pub fn finish_editing(
        &mut self,
        notifier: &mut dyn Notifier,
    ) -> Result<Option<RenewalReport>, ApiError> {
        if !self.screen.mode().is_editing() {
            return Ok(None);
        }
        if self.screen.selection().is_empty() {
            self.screen.toggle_edit();
            return Ok(None);
        }

        if let Err(err) = self.screen.guard(AdminAction::EditStatus, notifier) {
            // Denied: discard the selection and leave edit mode anyway,
            // otherwise the user is stuck in a mode they cannot commit.
            self.screen.toggle_edit();
            return Err(err);
        }

        let (store, selection): (&mut EntityStore<LicenseRenewal>, &SelectionSet) =
            self.screen.parts_mut();
        let report: RenewalReport = renew_selected(store, selection);

        let kind: NoticeKind = if report.renewed > 0 {
            NoticeKind::Success
        } else {
            NoticeKind::Info
        };
        notifier.notify(Notification {
            kind,
            message: report.summary(),
        });

        self.screen.toggle_edit();
        Ok(Some(report))
    }
}

/// The composite license administration screen.
///
/// Approvals and renewals load independently; a failed fetch in one
/// section leaves the other usable.
#[derive(Debug, Clone)]
pub struct LicenseScreen {
    approvals: ManagementScreen<LicenseApproval>,
    renewals: RenewalSection,
}

impl LicenseScreen {
    /// Creates the screen for the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            approvals: ManagementScreen::new(session.clone(), LicenseKind::Approval.noun()),
            renewals: RenewalSection::new(session),
        }
    }

    /// Replaces the session on both sections.
    pub fn set_session(&mut self, session: Session) {
        self.approvals.set_session(session.clone());
        self.renewals.screen_mut().set_session(session);
    }

    /// Returns the approval section.
    #[must_use]
    pub const fn approvals(&self) -> &ManagementScreen<LicenseApproval> {
        &self.approvals
    }

    /// Returns the approval section mutably.
    pub const fn approvals_mut(&mut self) -> &mut ManagementScreen<LicenseApproval> {
        &mut self.approvals
    }

    /// Returns the renewal section.
    #[must_use]
    pub const fn renewals(&self) -> &RenewalSection {
        &self.renewals
    }

    /// Returns the renewal section mutably.
    pub const fn renewals_mut(&mut self) -> &mut RenewalSection {
        &mut self.renewals
    }

    /// Fetches both sections from their data collaborators.
    ///
    /// The sections fail independently; see [`LoadState`].
    pub async fn load_from<A, R>(&mut self, approvals: &A, renewals: &R)
    where
        A: DataSource<Record = LicenseApproval>,
        R: DataSource<Record = LicenseRenewal>,
    {
        self.approvals.load_from(approvals).await;
        self.renewals.screen_mut().load_from(renewals).await;
    }

    /// Returns the load state of one section.
    #[must_use]
    pub const fn load_state(&self, kind: LicenseKind) -> &LoadState {
        match kind {
            LicenseKind::Approval => self.approvals.load_state(),
            LicenseKind::Renewal => self.renewals.screen().load_state(),
        }
    }

    /// Replaces the status of one approval record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for roles below controller or
    /// `ApiError::ResourceNotFound` for a vanished row. Approval
    /// transitions themselves are unconstrained.
    pub fn set_approval_status(
        &mut self,
        id: &EntityId,
        status: ApprovalStatus,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ApiError> {
        self.approvals.update_status(id, status, notifier)
    }

    /// Replaces the status of one renewal record.
    ///
    /// The eligibility gate applies to single edits the same as to bulk
    /// passes: an expired or unpaid license cannot be moved to `Renewed`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied`, `ApiError::ResourceNotFound`,
    /// or `ApiError::ValidationRejected` when the gate refuses.
    pub fn set_renewal_status(
        &mut self,
        id: &EntityId,
        status: RenewalStatus,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ApiError> {
        self.renewals.screen_mut().update_status(id, status, notifier)
    }

    /// Sends a license document to an approved applicant.
    ///
    /// Controller-only. The send itself is delegated to the rendering
    /// layer; this records the authorization outcome and the user-facing
    /// confirmation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::PermissionDenied` for every role except
    /// controller, or `ApiError::ResourceNotFound` when the record has
    /// vanished.
    pub fn send_license(
        &mut self,
        kind: LicenseKind,
        id: &EntityId,
        notifier: &mut dyn Notifier,
    ) -> Result<(), ApiError> {
        match kind {
            LicenseKind::Approval => {
                self.approvals.guard(AdminAction::SendLicense, notifier)?;
                if self.approvals.get(id).is_none() {
                    return Self::vanished(id, notifier);
                }
                notifier.notify(Notification::success("license sent successfully!"));
            }
            LicenseKind::Renewal => {
                self.renewals
                    .screen()
                    .guard(AdminAction::SendLicense, notifier)?;
                if self.renewals.screen().get(id).is_none() {
                    return Self::vanished(id, notifier);
                }
                notifier.notify(Notification::success("renewal license sent successfully!"));
            }
        }
        Ok(())
    }

    fn vanished(id: &EntityId, notifier: &mut dyn Notifier) -> Result<(), ApiError> {
        tracing::debug!(%id, "send on vanished row refused");
        let err: ApiError = ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: format!("Record with id '{id}' does not exist"),
        };
        notifier.notify(Notification::error(err.to_string()));
        Err(err)
    }
}
