mod common;

use citymover_core::rules::SignupForm;
use citymover_core::{ExErrorKind, Role, Route};
use citymover_core_types::Sensitive;
use citymover_engine::{login, messages, signup};

#[test]
fn test_demo_owner_lands_on_owner_dashboard() {
    let (_dir, db) = common::setup();

    let session = login(&db, "owner1", &Sensitive::from("123456")).unwrap();
    assert_eq!(session.user.role, Role::Owner);
    assert_eq!(session.route, Route::OwnerDashboard);
}

#[test]
fn test_login_trims_inputs() {
    let (_dir, db) = common::setup();

    let session = login(&db, "  user1 ", &Sensitive::from(" 123456 ")).unwrap();
    assert_eq!(session.user.username, "user1");
    assert_eq!(session.route, Route::UserDashboard);
}

#[test]
fn test_login_wrong_password() {
    // Given: The demo user
    let (_dir, db) = common::setup();

    // When: The password is wrong
    let err = login(&db, "user1", &Sensitive::from("nope")).unwrap_err();

    // Then: The error maps to the login message
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.op(), Some("login"));
    assert_eq!(messages::user_message(&err), messages::LOGIN_FAILED);
}

#[test]
fn test_signup_logs_in_new_account() {
    let (_dir, db) = common::setup();

    let session = signup(&db, SignupForm::new(" landlord ", "pw", Role::Owner)).unwrap();
    assert_eq!(session.user.username, "landlord");
    assert_eq!(session.route, Route::OwnerDashboard);

    let again = login(&db, "landlord", &Sensitive::from("pw")).unwrap();
    assert_eq!(again.user.id, session.user.id);
}

#[test]
fn test_signup_duplicate_username() {
    let (_dir, db) = common::setup();

    let err = signup(&db, SignupForm::new("user1", "other", Role::User)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::DuplicateUsername);
}

#[test]
fn test_signup_blank_password_rejected() {
    let (_dir, db) = common::setup();

    let err = signup(&db, SignupForm::new("someone", "   ", Role::User)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Validation);
    assert_eq!(err.field(), Some("password"));
    assert_eq!(err.op(), Some("signup"));
}

#[test]
fn test_signup_unknown_role_rejected() {
    let (_dir, db) = common::setup();
    let form = SignupForm {
        username: "someone".to_string(),
        password: Sensitive::from("pw"),
        role: "landlord".to_string(),
    };

    let err = signup(&db, form).unwrap_err();
    assert_eq!(err.field(), Some("role"));
}

#[test]
fn test_admin_signup_lands_on_user_dashboard() {
    let (_dir, db) = common::setup();

    let session = signup(&db, SignupForm::new("root", "pw", Role::Admin)).unwrap();
    assert_eq!(session.route, Route::UserDashboard);
}
