// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{RecordingNotifier, create_user};
use crate::auth::Session;
use crate::error::ApiError;
use crate::notify::NoticeKind;
use crate::users::UserAdminScreen;
use guide_admin_domain::{EntityId, Role};

fn admin_screen() -> UserAdminScreen {
    let mut screen = UserAdminScreen::new(Session::new(String::from("Aisyah"), Role::Admin));
    screen.screen_mut().load_records(vec![
        create_user("U-1", "Ahmad Yusof", Role::User),
        create_user("U-2", "Mei Ling", Role::Controller),
    ]);
    screen
}

fn controller_screen() -> UserAdminScreen {
    let mut screen = UserAdminScreen::new(Session::new(String::from("Borhan"), Role::Controller));
    screen
        .screen_mut()
        .load_records(vec![create_user("U-1", "Ahmad Yusof", Role::User)]);
    screen
}

#[test]
fn test_add_user_appends_and_notifies() {
    let mut screen = admin_screen();
    let mut notifier = RecordingNotifier::new();

    let added = screen.add_user(create_user("U-3", "Daniel Anak Jau", Role::User), &mut notifier);
    assert_eq!(added, Ok(true));
    assert_eq!(screen.screen().records().len(), 3);
    match notifier.last() {
        Some(n) => assert_eq!(n.message, "User added successfully!"),
        None => panic!("Expected a success notification"),
    }
}

#[test]
fn test_add_user_rejects_blank_name() {
    let mut screen = admin_screen();
    let mut notifier = RecordingNotifier::new();

    let result = screen.add_user(create_user("U-3", "   ", Role::User), &mut notifier);
    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "name"),
        other => panic!("Expected invalid input, got {other:?}"),
    }
    assert_eq!(screen.screen().records().len(), 2);
}

#[test]
fn test_account_mutations_are_admin_only() {
    let mut screen = controller_screen();
    let mut notifier = RecordingNotifier::new();

    // Controllers manage content, never accounts.
    assert!(
        screen
            .add_user(create_user("U-9", "Intruder", Role::Admin), &mut notifier)
            .is_err()
    );
    assert!(
        screen
            .assign_role(&EntityId::new("U-1"), Role::Admin, &mut notifier)
            .is_err()
    );
    assert!(
        screen
            .delete_user(&EntityId::new("U-1"), &mut notifier)
            .is_err()
    );

    assert_eq!(screen.screen().records().len(), 1);
    match screen.screen().get(&EntityId::new("U-1")) {
        Some(user) => assert_eq!(user.role, Role::User),
        None => panic!("Account vanished"),
    }
}

#[test]
fn test_assign_role_replaces_and_stamps() {
    let mut screen = admin_screen();
    let mut notifier = RecordingNotifier::new();

    let result = screen.assign_role(&EntityId::new("U-1"), Role::Controller, &mut notifier);
    assert_eq!(result, Ok(()));

    match screen.screen().get(&EntityId::new("U-1")) {
        Some(user) => {
            assert_eq!(user.role, Role::Controller);
            assert!(user.updated_at.is_some());
        }
        None => panic!("Account vanished"),
    }
    match notifier.last() {
        Some(n) => assert_eq!(n.message, "User role updated successfully!"),
        None => panic!("Expected a success notification"),
    }

    // The replacement keeps the account's position in the listing.
    assert_eq!(
        screen.screen().records()[0].id,
        EntityId::new("U-1")
    );
}

#[test]
fn test_assign_role_on_vanished_account() {
    let mut screen = admin_screen();
    let mut notifier = RecordingNotifier::new();

    let result = screen.assign_role(&EntityId::new("U-9"), Role::Admin, &mut notifier);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    assert_eq!(notifier.last_kind(), Some(NoticeKind::Error));
}

#[test]
fn test_delete_user_removes_and_vanished_delete_is_a_noop() {
    let mut screen = admin_screen();
    let mut notifier = RecordingNotifier::new();

    assert_eq!(
        screen.delete_user(&EntityId::new("U-2"), &mut notifier),
        Ok(true)
    );
    assert_eq!(screen.screen().records().len(), 1);
    assert_eq!(
        screen.delete_user(&EntityId::new("U-2"), &mut notifier),
        Ok(false)
    );
}

#[test]
fn test_user_search_covers_email_and_designation() {
    let mut screen = admin_screen();
    screen.screen_mut().set_query("U-2@sarawakparks");
    assert_eq!(screen.screen().filtered().len(), 1);

    screen.screen_mut().set_query("park guide");
    assert_eq!(screen.screen().filtered().len(), 2);
}
