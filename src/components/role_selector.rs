//! Development role switcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lets testers flip between access tiers without re-authenticating. A switch
//! writes the persisted role store *and* pushes the same role into the
//! session user, keeping the two role sources agreed (session stays the
//! authoritative one), then moves to the matching dashboard when the current
//! path is on a dashboard surface.

#[cfg(test)]
#[path = "role_selector_test.rs"]
mod role_selector_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::redirect::{ADMIN_DASHBOARD_PATH, ADMIN_PREFIX, USER_DASHBOARD_PATH};
use crate::auth::role_store::{BrowserRoleStore, RoleStore};
use crate::state::auth::{AuthState, Role};
use crate::state::session::SessionState;

/// Post-switch navigation target.
///
/// Only dashboard surfaces react to a role switch; elsewhere the user stays
/// put and the redirect policy picks the new role up on its next cycle.
pub fn switch_target(role: Role, path: &str) -> Option<&'static str> {
    if !(path.starts_with(USER_DASHBOARD_PATH) || path.starts_with(ADMIN_PREFIX)) {
        return None;
    }
    Some(if role.is_admin() {
        ADMIN_DASHBOARD_PATH
    } else {
        USER_DASHBOARD_PATH
    })
}

/// Floating role-switch widget for testing role-based routing.
#[component]
pub fn RoleSelector() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let switch = Callback::new(move |role: Role| {
        BrowserRoleStore.save(role);
        session.update(|s| {
            if let Some(user) = s.user.as_mut() {
                user.role = Some(role);
            }
        });
        auth.update(|a| a.role = role);
        if let Some(target) = switch_target(role, &location.pathname.get_untracked()) {
            navigate(target, NavigateOptions::default());
        }
    });

    let current = move || auth.get().role;

    view! {
        <div class="role-selector">
            <h4 class="role-selector__title">"Switch role (testing)"</h4>
            <button
                class="role-selector__option"
                class:role-selector__option--active=move || current() == Role::User
                on:click=move |_| switch.run(Role::User)
            >
                "User"
            </button>
            <button
                class="role-selector__option"
                class:role-selector__option--active=move || current() == Role::Subscriber
                on:click=move |_| switch.run(Role::Subscriber)
            >
                "Subscriber"
            </button>
            <button
                class="role-selector__option"
                class:role-selector__option--active=move || current() == Role::Admin
                on:click=move |_| switch.run(Role::Admin)
            >
                "Admin"
            </button>
        </div>
    }
}
