//! Role-based redirect policy and its single orchestration point.
//!
//! DESIGN
//! ======
//! [`decide`] is a pure function of (status, confirmed role, current path);
//! [`install_role_redirects`] is the only place a decision becomes a
//! navigation. The effect keeps the in-flight target until the location
//! reaches it, so one decision cycle issues at most one redirect and the
//! admin/user dashboards cannot oscillate.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use super::resolver::Resolution;
use crate::state::auth::Role;
use crate::state::session::{SessionState, SessionStatus};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/auth/login";
/// Role-based landing entry point.
pub const HOME_PATH: &str = "/";
/// Dashboard for `user` and `subscriber` roles.
pub const USER_DASHBOARD_PATH: &str = "/dashboard";
/// Every path below this prefix is admin-only.
pub const ADMIN_PREFIX: &str = "/admin";
/// Dashboard for the `admin` role.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Compute the redirect target for the current inputs, `None` for no-op.
///
/// Callers must gate on [`Resolution::is_confirmed`]; a loading session
/// always yields `None` here as a second line of defense.
pub fn decide(status: SessionStatus, role: Option<Role>, path: &str) -> Option<&'static str> {
    match status {
        SessionStatus::Loading => None,
        SessionStatus::Unauthenticated => (path != LOGIN_PATH).then_some(LOGIN_PATH),
        SessionStatus::Authenticated => {
            let role = role?;
            let on_admin_path = path.starts_with(ADMIN_PREFIX);
            let on_user_dashboard = path == USER_DASHBOARD_PATH;
            if path == HOME_PATH || path.is_empty() {
                return Some(if role.is_admin() {
                    ADMIN_DASHBOARD_PATH
                } else {
                    USER_DASHBOARD_PATH
                });
            }
            match (role.is_admin(), on_admin_path, on_user_dashboard) {
                // Already on the correct surface.
                (true, true, _) | (false, false, true) => None,
                (true, false, true) => Some(ADMIN_DASHBOARD_PATH),
                (false, true, _) => Some(USER_DASHBOARD_PATH),
                _ => None,
            }
        }
    }
}

/// Install the redirect orchestration effect for the current route.
///
/// Re-evaluates whenever the session, resolution, or location changes. While
/// a redirect is in flight its target is remembered and further decisions are
/// suppressed until the location lands there; Leptos disposes the effect on
/// unmount, so a pending decision never navigates after the component is gone.
pub fn install_role_redirects<F>(
    session: RwSignal<SessionState>,
    resolution: RwSignal<Resolution>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let in_flight: StoredValue<Option<&'static str>> = StoredValue::new(None);
    Effect::new(move || {
        let path = location.pathname.get();
        let res = resolution.get();
        let status = session.get().status;

        if in_flight.get_value().is_some_and(|target| target == path) {
            in_flight.set_value(None);
        }
        if in_flight.get_value().is_some() {
            return;
        }
        if !res.is_confirmed {
            return;
        }
        if let Some(target) = decide(status, res.confirmed, &path) {
            in_flight.set_value(Some(target));
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}
