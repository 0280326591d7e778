// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures shared across the API test modules.

use crate::notify::{NoticeKind, Notification, Notifier};
use crate::source::{DataSource, FetchError};
use guide_admin_domain::{
    ApprovalStatus, Course, EntityId, LicenseApproval, LicenseRenewal, ManagedUser, RenewalStatus,
    Role,
};
use time::Date;
use time::Month;

/// A notifier that records every notification it is handed.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn last_kind(&self) -> Option<NoticeKind> {
        self.notifications.last().map(|n| n.kind)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// A data source that resolves with a fixed record set.
pub struct FixedSource<R: Clone + Send + Sync>(pub Vec<R>);

impl<R: Clone + Send + Sync> DataSource for FixedSource<R> {
    type Record = R;

    async fn fetch(&self) -> Result<Vec<R>, FetchError> {
        Ok(self.0.clone())
    }
}

/// A data source that always fails.
pub struct FailingSource;

impl DataSource for FailingSource {
    type Record = LicenseRenewal;

    async fn fetch(&self) -> Result<Vec<LicenseRenewal>, FetchError> {
        Err(FetchError::Request(String::from("connection refused")))
    }
}

pub fn create_course(id: i64, name: &str) -> Course {
    Course {
        id: EntityId::from(id),
        course_name: String::from(name),
        course_description: format!("{name} description"),
        instructor_name: Some(String::from("Siti Rahman")),
        instructor_image: None,
        created_at: None,
    }
}

pub fn create_approval(id: &str, user_name: &str, status: ApprovalStatus) -> LicenseApproval {
    LicenseApproval {
        id: EntityId::new(id),
        user_name: String::from(user_name),
        course_progress: String::from("100%"),
        programme_progress: String::from("100%"),
        exam_result: String::from("Passed"),
        status,
    }
}

pub fn create_renewal(id: &str, user_name: &str, status: RenewalStatus) -> LicenseRenewal {
    LicenseRenewal {
        id: EntityId::new(id),
        user_name: String::from(user_name),
        start_date: String::from("14/3/2023"),
        expired_date: String::from("14/3/2026"),
        payment: String::from("Done"),
        status,
        days_until_expiry: 45,
    }
}

pub fn create_user(id: &str, name: &str, role: Role) -> ManagedUser {
    let created_at: Date = match Date::from_calendar_date(2025, Month::June, 2) {
        Ok(date) => date,
        Err(e) => panic!("fixture date invalid: {e}"),
    };
    ManagedUser {
        id: EntityId::new(id),
        name: String::from(name),
        email: format!("{id}@sarawakparks.example"),
        designation: String::from("Park Guide"),
        role,
        created_at,
        updated_at: None,
    }
}
