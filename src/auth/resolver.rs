//! Confirmed-role derivation from session status and the persisted cache.
//!
//! DESIGN
//! ======
//! Role precedence is a single merge: session role wins, the persisted store
//! is a fallback cache, and an authenticated session with neither yields
//! `Role::User`. The role switcher writes both sources together, so they
//! cannot disagree after a manual override. `resolve` is pure; persistence
//! goes through the [`RoleStore`] port and only writes on change, so
//! re-running with identical inputs is idempotent.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use leptos::prelude::*;

use super::role_store::{BrowserRoleStore, RoleStore};
use crate::state::auth::Role;
use crate::state::session::{SessionState, SessionStatus};

/// Outcome of role resolution for the current session snapshot.
///
/// `confirmed` is only meaningful once `is_confirmed` is set; redirect and
/// guard logic must not act on an unconfirmed resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Authoritative role, `None` while loading or when unauthenticated.
    pub confirmed: Option<Role>,
    /// Whether the session has reached a terminal status.
    pub is_confirmed: bool,
}

/// Derive the confirmed role from a session status, the session's claimed
/// role, and the persisted fallback.
pub fn resolve(
    status: SessionStatus,
    session_role: Option<Role>,
    persisted_role: Option<Role>,
) -> Resolution {
    match status {
        SessionStatus::Loading => Resolution::default(),
        SessionStatus::Unauthenticated => Resolution {
            confirmed: None,
            is_confirmed: true,
        },
        SessionStatus::Authenticated => Resolution {
            confirmed: Some(session_role.or(persisted_role).unwrap_or_default()),
            is_confirmed: true,
        },
    }
}

/// Resolve against `store` and cache the outcome.
///
/// The resolved role is written back only when it differs from the cached
/// value, so subsequent page loads see it before the session source responds
/// and repeated identical calls trigger no extra writes.
pub fn resolve_and_cache(
    status: SessionStatus,
    session_role: Option<Role>,
    store: &impl RoleStore,
) -> Resolution {
    let cached = store.load();
    let resolution = resolve(status, session_role, cached);
    if let Some(role) = resolution.confirmed {
        if cached != Some(role) {
            store.save(role);
        }
    }
    resolution
}

/// Install the resolution effect: recompute the shared [`Resolution`] signal
/// on every session change, persisting through the browser role store.
pub fn install_role_resolution(session: RwSignal<SessionState>, resolution: RwSignal<Resolution>) {
    let store = BrowserRoleStore;
    Effect::new(move || {
        let snapshot = session.get();
        let next = resolve_and_cache(
            snapshot.status,
            snapshot.user.as_ref().and_then(|u| u.role),
            &store,
        );
        if resolution.get_untracked() != next {
            resolution.set(next);
        }
    });
}
