// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter_view;
use crate::tests::helpers::create_course;
use guide_admin_domain::{Course, EntityId};

fn sample_courses() -> Vec<Course> {
    vec![
        create_course(1, "Wildlife Photo"),
        create_course(2, "Bird Watching"),
        create_course(3, "Jungle Survival"),
    ]
}

#[test]
fn test_substring_match_is_case_insensitive() {
    let courses: Vec<Course> = sample_courses();

    let view: Vec<Course> = filter_view(&courses, "bird");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, EntityId::from(2));

    let view: Vec<Course> = filter_view(&courses, "BIRD");
    assert_eq!(view.len(), 1);
}

#[test]
fn test_empty_query_is_identity() {
    let courses: Vec<Course> = sample_courses();
    assert_eq!(filter_view(&courses, ""), courses);
}

#[test]
fn test_whitespace_query_is_identity() {
    let courses: Vec<Course> = sample_courses();
    assert_eq!(filter_view(&courses, "   "), courses);
}

#[test]
fn test_filter_is_idempotent() {
    let courses: Vec<Course> = sample_courses();
    let once: Vec<Course> = filter_view(&courses, "photo");
    let twice: Vec<Course> = filter_view(&once, "photo");
    assert_eq!(once, twice);
}

#[test]
fn test_filter_preserves_source_order() {
    let courses: Vec<Course> = vec![
        create_course(3, "River Guide"),
        create_course(1, "River Safety"),
        create_course(2, "Caving"),
    ];

    let view: Vec<Course> = filter_view(&courses, "river");
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].id, EntityId::from(3));
    assert_eq!(view[1].id, EntityId::from(1));
}

#[test]
fn test_matches_across_multiple_fields() {
    let courses: Vec<Course> = sample_courses();

    // Instructor name is a searchable field on every fixture.
    let view: Vec<Course> = filter_view(&courses, "siti");
    assert_eq!(view.len(), 3);
}

#[test]
fn test_absent_field_never_panics() {
    let mut course: Course = create_course(1, "Wildlife Photo");
    course.instructor_name = None;

    let view: Vec<Course> = filter_view(&[course], "siti");
    assert!(view.is_empty());
}

#[test]
fn test_no_match_yields_empty_view() {
    let courses: Vec<Course> = sample_courses();
    assert!(filter_view(&courses, "astronomy").is_empty());
}
