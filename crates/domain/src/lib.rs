// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod entity;
mod error;
mod license;
mod types;
mod validation;

// Re-export public types
pub use entity::{Entity, EntityId, StatusEntity, StatusValue};
pub use error::DomainError;
pub use license::{ApprovalStatus, LicenseApproval, LicenseRenewal, RenewalStatus};
pub use types::{Course, ManagedUser, MentorProgram, RecommendedCourse, Role};
pub use validation::{validate_display_name, validate_entity_id};
