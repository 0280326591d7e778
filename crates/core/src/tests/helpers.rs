// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures shared across the core test modules.

use guide_admin_domain::{Course, EntityId, LicenseRenewal, RenewalStatus};

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
