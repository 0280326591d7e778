// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! License status tracking and transition logic.
//!
//! Two independent status variants exist: approval (unconstrained graph,
//! permission-gated only) and renewal (the transition to `Renewed` is
//! gated on eligibility). The renewal asymmetry models a business rule:
//! a license cannot be marked renewed while unpaid or already expired.

use crate::entity::{Entity, EntityId, StatusEntity, StatusValue};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// License approval status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Certification requirements not yet met or under review.
    Pending,
    /// The license application has been approved.
    Approved,
    /// The license application has been rejected.
    Reject,
}

impl StatusValue for ApprovalStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Reject => "reject",
        }
    }

    // Any approval status may move to any other; only the permission
    // gate can refuse an approval edit.
    fn transition_allowed(self, _requested: Self) -> bool {
        true
    }
}

impl FromStr for ApprovalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "reject" => Ok(Self::Reject),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// License renewal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenewalStatus {
    /// The license lapsed; renewal is no longer possible.
    Expired,
    /// The license is approaching expiry and must be renewed.
    #[serde(rename = "Renew Required")]
    RenewRequired,
    /// The license has been renewed.
    Renewed,
    /// Renewal payment is outstanding.
    #[serde(rename = "No Payment")]
    NoPayment,
}

impl RenewalStatus {
    /// Returns whether a license in this status may be marked `Renewed`.
    ///
    /// Expired licenses and licenses with outstanding payment are not
    /// eligible.
    #[must_use]
    pub const fn is_renewable(&self) -> bool {
        !matches!(self, Self::Expired | Self::NoPayment)
    }

    /// Returns why a renewal from this status is blocked, if it is.
    #[must_use]
    pub const fn renewal_block_reason(&self) -> Option<&'static str> {
        match self {
            Self::Expired => Some("an expired license cannot be renewed"),
            Self::NoPayment => Some("renewal payment is outstanding"),
            Self::RenewRequired | Self::Renewed => None,
        }
    }
}

impl StatusValue for RenewalStatus {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::RenewRequired => "Renew Required",
            Self::Renewed => "Renewed",
            Self::NoPayment => "No Payment",
        }
    }

    fn transition_allowed(self, requested: Self) -> bool {
        // Only the transition into Renewed is gated; every other target
        // is reachable unconditionally.
        match requested {
            Self::Renewed => self.is_renewable(),
            Self::Expired | Self::RenewRequired | Self::NoPayment => true,
        }
    }

    fn validate_transition(self, requested: Self) -> Result<(), DomainError> {
        if self.transition_allowed(requested) {
            return Ok(());
        }
        let reason: &'static str = self
            .renewal_block_reason()
            .unwrap_or("transition not permitted by status lifecycle rules");
        Err(DomainError::StatusTransitionBlocked {
            from: self.as_str().to_string(),
            to: requested.as_str().to_string(),
            reason: reason.to_string(),
        })
    }
}

impl FromStr for RenewalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Expired" => Ok(Self::Expired),
            "Renew Required" => Ok(Self::RenewRequired),
            "Renewed" => Ok(Self::Renewed),
            "No Payment" => Ok(Self::NoPayment),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RenewalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A license application awaiting approval.
///
/// Progress fields are denormalized display strings from the certification
/// pipeline (course completion, programme completion, exam result).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseApproval {
    /// The stable identifier.
    pub id: EntityId,
    /// The applying guide's display name.
    pub user_name: String,
    /// Course completion progress.
    pub course_progress: String,
    /// Mentor programme completion progress.
    pub programme_progress: String,
    /// Certification exam result.
    pub exam_result: String,
    /// The current approval status.
    pub status: ApprovalStatus,
}

impl Entity for LicenseApproval {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            &self.user_name,
            &self.course_progress,
            &self.programme_progress,
            &self.exam_result,
            self.status.as_str(),
        ]
    }
}

impl StatusEntity for LicenseApproval {
    type Status = ApprovalStatus;

    fn status(&self) -> ApprovalStatus {
        self.status
    }

    fn set_status(&mut self, status: ApprovalStatus) {
        self.status = status;
    }
}

/// A license tracked for renewal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRenewal {
    /// The stable identifier.
    pub id: EntityId,
    /// The license holder's display name.
    pub user_name: String,
    /// License start date, display-only.
    pub start_date: String,
    /// License expiry date, display-only.
    pub expired_date: String,
    /// Renewal payment progress.
    pub payment: String,
    /// The current renewal status.
    pub status: RenewalStatus,
    /// Days until expiry; negative once expired.
    pub days_until_expiry: i64,
}

impl Entity for LicenseRenewal {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            &self.user_name,
            &self.start_date,
            &self.expired_date,
            &self.payment,
            self.status.as_str(),
        ]
    }
}

impl StatusEntity for LicenseRenewal {
    type Status = RenewalStatus;

    fn status(&self) -> RenewalStatus {
        self.status
    }

    fn set_status(&mut self, status: RenewalStatus) {
        self.status = status;
    }
}
