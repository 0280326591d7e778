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
    clippy::all
)]

mod auth;
mod capabilities;
mod error;
mod license;
mod notify;
mod screen;
mod source;
mod users;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use auth::{AdminAction, AuthorizationService, Session};
pub use capabilities::{Capability, ScreenCapabilities, UserAdminCapabilities};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use license::{LicenseKind, LicenseScreen, RenewalSection};
pub use notify::{Notification, Notifier, NoticeKind};
pub use screen::ManagementScreen;
pub use source::{
    CourseRow, DataSource, FetchError, InstructorRow, LoadState, RenewalRow, parse_courses,
    parse_renewals,
};
pub use users::UserAdminScreen;
