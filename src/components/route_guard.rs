//! Role-gated wrapper for protected route content.
//!
//! DESIGN
//! ======
//! [`evaluate`] is the pure state machine: checking until the role is
//! confirmed, then denied / forbidden / allowed exactly once per terminal
//! session state. The component applies the matching side effect (spinner,
//! redirect, or children) and re-enters checking only when the session
//! returns to its loading state, e.g. on a session refresh.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::redirect::{LOGIN_PATH, USER_DASHBOARD_PATH};
use crate::auth::resolver::Resolution;
use crate::components::loading_spinner::LoadingSpinner;
use crate::state::auth::Role;
use crate::state::session::{SessionState, SessionStatus};

/// Roles accepted by a guard: a single role or any of a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRequirement(Vec<Role>);

impl RoleRequirement {
    pub fn allows(&self, role: Role) -> bool {
        self.0.contains(&role)
    }
}

impl From<Role> for RoleRequirement {
    fn from(role: Role) -> Self {
        Self(vec![role])
    }
}

impl From<Vec<Role>> for RoleRequirement {
    fn from(roles: Vec<Role>) -> Self {
        Self(roles)
    }
}

/// Guard verdict for the current session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session still loading, or a required role is not yet confirmed.
    Checking,
    /// No session; redirect to login.
    Denied,
    /// Authenticated but outside the required role set; redirect to the
    /// default dashboard.
    Forbidden,
    /// Render the protected children.
    Allowed,
}

/// Pure guard decision.
pub fn evaluate(
    status: SessionStatus,
    resolution: Resolution,
    required: Option<&RoleRequirement>,
) -> GuardState {
    if !resolution.is_confirmed {
        return GuardState::Checking;
    }
    match status {
        SessionStatus::Loading => GuardState::Checking,
        SessionStatus::Unauthenticated => GuardState::Denied,
        SessionStatus::Authenticated => match required {
            None => GuardState::Allowed,
            Some(requirement) => match resolution.confirmed {
                None => GuardState::Checking,
                Some(role) if requirement.allows(role) => GuardState::Allowed,
                Some(_) => GuardState::Forbidden,
            },
        },
    }
}

/// Wraps protected content; blocks rendering until the session is confirmed
/// and the role (when given) is permitted.
#[component]
pub fn RouteGuard(
    /// Role(s) allowed through; `None` admits any authenticated user.
    #[prop(optional, into)]
    required_role: Option<RoleRequirement>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let resolution = expect_context::<RwSignal<Resolution>>();
    let navigate = use_navigate();

    let state = Memo::new(move |_| {
        evaluate(session.get().status, resolution.get(), required_role.as_ref())
    });

    // One redirect per denial; cleared when the guard re-enters checking so a
    // later session refresh can redirect again.
    let fired: StoredValue<Option<GuardState>> = StoredValue::new(None);
    Effect::new(move || match state.get() {
        GuardState::Checking | GuardState::Allowed => fired.set_value(None),
        verdict @ (GuardState::Denied | GuardState::Forbidden) => {
            if fired.get_value() == Some(verdict) {
                return;
            }
            fired.set_value(Some(verdict));
            let target = match verdict {
                GuardState::Denied => LOGIN_PATH,
                _ => USER_DASHBOARD_PATH,
            };
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || state.get() == GuardState::Allowed
            fallback=move || {
                view! {
                    <Show when=move || state.get() == GuardState::Checking fallback=|| ()>
                        <div class="route-guard">
                            <LoadingSpinner large=true/>
                            <p class="route-guard__message">"Checking your session..."</p>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
