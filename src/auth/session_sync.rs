//! Session source bridging: fetch + auth-store synchronization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend session endpoint is the only producer of session state. The
//! loader fetches once at hydrate time and collapses every failure to
//! unauthenticated (no retries, no error surface). The sync effect mirrors
//! each terminal session into the auth store; a loading session leaves the
//! store untouched so a refresh does not flicker identity away.

#[cfg(test)]
#[path = "session_sync_test.rs"]
mod session_sync_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::{SessionState, SessionStatus};

/// Merge a session snapshot into the auth store.
///
/// Returns `true` when the store changed. Loading snapshots never touch the
/// store; unauthenticated ones reset it; authenticated ones copy identity,
/// role (defaulting to `user`), and token.
pub fn apply_session(auth: &mut AuthState, session: &SessionState) -> bool {
    match session.status {
        SessionStatus::Loading => false,
        SessionStatus::Unauthenticated => {
            if *auth == AuthState::default() {
                return false;
            }
            auth.reset();
            true
        }
        SessionStatus::Authenticated => {
            let Some(user) = session.user.as_ref() else {
                return false;
            };
            let next = AuthState {
                user_id: user.id.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
                role: user.role.unwrap_or_default(),
                token: session.token.clone().unwrap_or_default(),
            };
            if *auth == next {
                return false;
            }
            *auth = next;
            true
        }
    }
}

/// Install the effect that keeps the auth store in sync with the session.
pub fn install_session_sync(session: RwSignal<SessionState>, auth: RwSignal<AuthState>) {
    Effect::new(move || {
        let snapshot = session.get();
        let changed = auth.with_untracked(|current| {
            let mut probe = current.clone();
            apply_session(&mut probe, &snapshot).then_some(probe)
        });
        if let Some(next) = changed {
            auth.set(next);
        }
    });
}

/// Kick off the initial session fetch. Browser-only; during SSR the session
/// stays in its loading state and guards render their checking UI.
pub fn load_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::fetch_session().await {
                Some(payload) => SessionState::authenticated(payload.user, payload.token),
                None => SessionState::unauthenticated(),
            };
            session.set(next);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
