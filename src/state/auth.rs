//! Access roles and the session-derived identity store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` mirrors the last authenticated session so user-aware
//! components can render identity without touching the session signal.
//! It is written only by the session synchronizer and the role switcher.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Access tier for the current user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Baseline tier; also the fallback when a session carries no role.
    #[default]
    User,
    /// Paid tier; same routing surface as `User`.
    Subscriber,
    /// Administrative tier with access to `/admin` routes.
    Admin,
}

impl Role {
    /// Wire/storage string form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Subscriber => "subscriber",
            Role::Admin => "admin",
        }
    }

    /// Parse the wire/storage string form. Unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "subscriber" => Some(Role::Subscriber),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// Identity mirror of the current session.
///
/// In the running app this lives in an `RwSignal` provided via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl AuthState {
    /// Reset to the signed-out baseline (empty identity, `Role::User`).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
