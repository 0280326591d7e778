// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk license renewal.
//!
//! The selected renewals are partitioned by the eligibility gate before
//! anything is applied: eligible records move to `Renewed`, ineligible
//! records are left untouched, and the caller receives counts of each
//! outcome for the user-facing summary.

use crate::selection::SelectionSet;
use crate::store::EntityStore;
use guide_admin_domain::{EntityId, LicenseRenewal, RenewalStatus};

/// The outcome of a bulk renewal pass, itemized by rejection reason.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenewalReport {
    /// Records updated to `Renewed`.
    pub renewed: usize,
    /// Selected records skipped because the license is expired.
    pub expired: usize,
    /// Selected records skipped because payment is outstanding.
    pub no_payment: usize,
}

impl RenewalReport {
    /// Returns the number of selected records that could not be updated.
    #[must_use]
    pub const fn blocked(&self) -> usize {
        self.expired + self.no_payment
    }

    /// Returns whether the pass touched or considered any record at all.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.renewed == 0 && self.blocked() == 0
    }

    /// Renders the user-facing summary of this pass.
    ///
    /// Successful updates lead; blocked records follow as an itemized
    /// breakdown by reason rather than a bare failure.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut message: String = if self.renewed > 0 {
            format!(
                "{} renewal record(s) updated to \"Renewed\" successfully!",
                self.renewed
            )
        } else {
            String::from("No items could be updated to \"Renewed\".")
        };

        if self.blocked() > 0 {
            if self.renewed > 0 {
                message.push_str(&format!(
                    "\n\n{} item(s) could not be updated:",
                    self.blocked()
                ));
            } else {
                message.push_str("\n\nSelected items cannot be updated:");
            }
            if self.expired > 0 {
                message.push_str(&format!(
                    "\n- {} expired license(s) (cannot be renewed)",
                    self.expired
                ));
            }
            if self.no_payment > 0 {
                message.push_str(&format!(
                    "\n- {} no payment status (cannot be renewed)",
                    self.no_payment
                ));
            }
        }

        message
    }
}

/// Applies a bulk transition to `Renewed` over the selected records.
///
/// Eligibility follows `RenewalStatus::is_renewable`: expired and unpaid
/// licenses are skipped and counted, never partially applied. Selected ids
/// with no matching record are ignored. The selection itself is not
/// modified; clearing it is the caller's responsibility as part of
/// leaving edit mode.
pub fn renew_selected(
    store: &mut EntityStore<LicenseRenewal>,
    selection: &SelectionSet,
) -> RenewalReport {
    let mut report: RenewalReport = RenewalReport::default();

    let selected: Vec<EntityId> = selection.iter().cloned().collect();
    for id in &selected {
        let Some(record) = store.get(id) else {
            continue;
        };
        match record.status {
            RenewalStatus::Expired => report.expired += 1,
            RenewalStatus::NoPayment => report.no_payment += 1,
            RenewalStatus::RenewRequired | RenewalStatus::Renewed => {
                if store.update_status(id, RenewalStatus::Renewed) {
                    report.renewed += 1;
                }
            }
        }
    }

    report
}
