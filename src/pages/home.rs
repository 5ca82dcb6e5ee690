//! Role-based landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` renders nothing of its own: once the role is confirmed, the redirect
//! policy sends admins to `/admin/dashboard`, everyone else to `/dashboard`,
//! and unauthenticated visitors to the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::redirect::install_role_redirects;
use crate::auth::resolver::Resolution;
use crate::components::loading_spinner::LoadingSpinner;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let resolution = expect_context::<RwSignal<Resolution>>();
    install_role_redirects(session, resolution, use_navigate());

    view! {
        <div class="home-page">
            <LoadingSpinner large=true/>
            <p class="home-page__message">"Preparing your dashboard..."</p>
        </div>
    }
}
