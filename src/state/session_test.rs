use super::*;

// =============================================================
// SessionStatus
// =============================================================

#[test]
fn session_status_default_is_loading() {
    assert_eq!(SessionStatus::default(), SessionStatus::Loading);
}

#[test]
fn session_status_variants_are_distinct() {
    assert_ne!(SessionStatus::Loading, SessionStatus::Unauthenticated);
    assert_ne!(SessionStatus::Loading, SessionStatus::Authenticated);
    assert_ne!(SessionStatus::Unauthenticated, SessionStatus::Authenticated);
}

// =============================================================
// SessionState constructors
// =============================================================

#[test]
fn default_session_is_loading_with_no_user() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn unauthenticated_session_clears_user_and_token() {
    let state = SessionState::unauthenticated();
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn authenticated_session_carries_user_and_token() {
    let user = SessionUser {
        id: "u-1".to_owned(),
        email: "kim@example.com".to_owned(),
        name: "Kim".to_owned(),
        role: None,
    };
    let state = SessionState::authenticated(user.clone(), Some("tok".to_owned()));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert_eq!(state.user, Some(user));
    assert_eq!(state.token.as_deref(), Some("tok"));
}
