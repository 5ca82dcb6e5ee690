//! Admin dashboard — user listing behind an admin-only guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard requires a confirmed admin role before anything renders.
//! Non-admin authenticated users are bounced to `/dashboard`; signed-out
//! visitors go to the login page. The user table loads once on mount and
//! can be reloaded on demand.

use leptos::prelude::*;

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::role_selector::RoleSelector;
use crate::components::route_guard::{RoleRequirement, RouteGuard};
use crate::components::users_table::UsersTable;
use crate::net::types::AdminUser;
use crate::state::auth::Role;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load_users = move || {
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_admin_users().await {
                Ok(list) => users.set(list),
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        });
    };

    Effect::new(move || load_users());

    view! {
        <RouteGuard required_role=RoleRequirement::from(Role::Admin)>
            <div class="admin-page">
                <header class="admin-page__header">
                    <h1>"Admin Dashboard"</h1>
                    <span class="admin-page__spacer"></span>
                    <button
                        class="admin-page__refresh"
                        on:click=move |_| load_users()
                        disabled=move || loading.get()
                    >
                        "Refresh"
                    </button>
                </header>

                <Show when=move || error.get().is_some()>
                    <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || {
                        view! {
                            <div class="admin-page__loading">
                                <LoadingSpinner/>
                                <p>"Loading users..."</p>
                            </div>
                        }
                    }
                >
                    {move || view! { <UsersTable users=users.get()/> }}
                </Show>

                <RoleSelector/>
            </div>
        </RouteGuard>
    }
}
