use super::*;
use crate::net::types::SessionUser;
use crate::state::auth::Role;

fn user(role: Option<Role>) -> SessionUser {
    SessionUser {
        id: "u-1".to_owned(),
        email: "kim@example.com".to_owned(),
        name: "Kim".to_owned(),
        role,
    }
}

#[test]
fn loading_session_leaves_the_store_untouched() {
    let mut auth = AuthState {
        user_id: "u-1".to_owned(),
        name: "Kim".to_owned(),
        email: "kim@example.com".to_owned(),
        role: Role::Admin,
        token: "tok".to_owned(),
    };
    let before = auth.clone();
    assert!(!apply_session(&mut auth, &SessionState::default()));
    assert_eq!(auth, before);
}

#[test]
fn unauthenticated_session_resets_the_store() {
    let mut auth = AuthState {
        user_id: "u-1".to_owned(),
        role: Role::Admin,
        ..AuthState::default()
    };
    assert!(apply_session(&mut auth, &SessionState::unauthenticated()));
    assert_eq!(auth, AuthState::default());
}

#[test]
fn unauthenticated_reset_is_idempotent() {
    let mut auth = AuthState::default();
    assert!(!apply_session(&mut auth, &SessionState::unauthenticated()));
}

#[test]
fn authenticated_session_copies_identity_and_token() {
    let mut auth = AuthState::default();
    let session = SessionState::authenticated(user(Some(Role::Subscriber)), Some("tok".to_owned()));
    assert!(apply_session(&mut auth, &session));
    assert_eq!(auth.user_id, "u-1");
    assert_eq!(auth.email, "kim@example.com");
    assert_eq!(auth.role, Role::Subscriber);
    assert_eq!(auth.token, "tok");
}

#[test]
fn missing_session_role_defaults_to_user() {
    let mut auth = AuthState::default();
    let session = SessionState::authenticated(user(None), None);
    assert!(apply_session(&mut auth, &session));
    assert_eq!(auth.role, Role::User);
    assert_eq!(auth.token, "");
}

#[test]
fn identical_authenticated_session_does_not_rewrite() {
    let mut auth = AuthState::default();
    let session = SessionState::authenticated(user(Some(Role::User)), None);
    assert!(apply_session(&mut auth, &session));
    assert!(!apply_session(&mut auth, &session));
}
