// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::source::{FetchError, parse_courses, parse_renewals};
use guide_admin_domain::{Entity, EntityId, RenewalStatus};
use time::Month;

#[test]
fn test_parse_courses_flattens_the_instructor_join() {
    let payload = r#"[
        {
            "id": 7,
            "course_name": "Bird Watching Basics",
            "course_description": "Spotting and identifying hornbills",
            "created_at": "2025-06-02",
            "instructor": { "name": "Siti Rahman", "image_url": "https://cdn.example/siti.jpg" }
        },
        {
            "id": 8,
            "course_name": "Jungle Survival",
            "course_description": "Navigation and first aid"
        }
    ]"#;

    let courses = match parse_courses(payload) {
        Ok(courses) => courses,
        Err(e) => panic!("Failed to parse course payload: {e}"),
    };
    assert_eq!(courses.len(), 2);

    assert_eq!(courses[0].id.as_str(), "7");
    assert_eq!(courses[0].instructor_name.as_deref(), Some("Siti Rahman"));
    assert_eq!(
        courses[0].instructor_image.as_deref(),
        Some("https://cdn.example/siti.jpg")
    );
    match courses[0].created_at {
        Some(date) => {
            assert_eq!(date.year(), 2025);
            assert_eq!(date.month(), Month::June);
        }
        None => panic!("Expected a parsed creation date"),
    }

    // No joined instructor: the flattened fields stay absent.
    assert!(courses[1].instructor_name.is_none());
    assert!(courses[1].created_at.is_none());
}

#[test]
fn test_unparseable_timestamp_degrades_to_absent() {
    let payload = r#"[
        {
            "id": 9,
            "course_name": "Night Trekking",
            "course_description": "After-dark guiding",
            "created_at": "last tuesday"
        }
    ]"#;

    let courses = match parse_courses(payload) {
        Ok(courses) => courses,
        Err(e) => panic!("Failed to parse course payload: {e}"),
    };
    assert!(courses[0].created_at.is_none());
}

#[test]
fn test_parse_renewals_decodes_wire_statuses() {
    let payload = r#"[
        {
            "id": "L-1",
            "user_name": "Ahmad Yusof",
            "start_date": "14/3/2023",
            "expired_date": "14/3/2026",
            "payment": "Done",
            "status": "Renew Required",
            "days_until_expiry": 45
        },
        {
            "id": "L-2",
            "user_name": "Mei Ling",
            "start_date": "1/1/2020",
            "expired_date": "1/1/2023",
            "payment": "None",
            "status": "No Payment"
        }
    ]"#;

    let renewals = match parse_renewals(payload) {
        Ok(renewals) => renewals,
        Err(e) => panic!("Failed to parse renewal payload: {e}"),
    };
    assert_eq!(renewals.len(), 2);
    assert_eq!(renewals[0].status, RenewalStatus::RenewRequired);
    assert_eq!(renewals[1].status, RenewalStatus::NoPayment);
    assert_eq!(renewals[1].days_until_expiry, 0);
    assert_eq!(renewals[0].id(), &EntityId::new("L-1"));
}

#[test]
fn test_unknown_wire_status_fails_the_payload() {
    let payload = r#"[
        {
            "id": "L-1",
            "user_name": "Ahmad Yusof",
            "start_date": "14/3/2023",
            "expired_date": "14/3/2026",
            "payment": "Done",
            "status": "renewed"
        }
    ]"#;

    match parse_renewals(payload) {
        Err(FetchError::Payload(_)) => {}
        other => panic!("Expected a payload error, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_a_payload_error() {
    assert!(matches!(
        parse_courses("not json"),
        Err(FetchError::Payload(_))
    ));
}
