//! Session snapshot from the external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is produced and invalidated entirely by the backend auth
//! endpoints; this module only models the snapshot. Role resolution and
//! redirect decisions read it, never mutate its user or token directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// Resolution state of the current browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Session fetch has not completed yet.
    #[default]
    Loading,
    /// No valid session exists (including provider/network failures).
    Unauthenticated,
    /// A valid session with an identified user exists.
    Authenticated,
}

/// Identity snapshot for the current browser user.
///
/// `user` and `token` are only meaningful while `status` is
/// [`SessionStatus::Authenticated`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl SessionState {
    /// An unauthenticated session with no user or token.
    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
            token: None,
        }
    }

    /// An authenticated session for `user` with an optional bearer token.
    pub fn authenticated(user: SessionUser, token: Option<String>) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
            token,
        }
    }
}
