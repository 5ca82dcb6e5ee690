//! Company dashboard — search plus financial/ESG metric panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route for non-admin roles. The route
//! guard blocks rendering until the session is confirmed; the redirect
//! orchestration bounces admins over to `/admin/dashboard`. Metric data is
//! fetched whenever the selected company changes, with a stale-response
//! check so an older fetch can never overwrite a newer selection.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::redirect::install_role_redirects;
use crate::auth::resolver::Resolution;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::metric_panels::MetricPanels;
use crate::components::role_selector::RoleSelector;
use crate::components::route_guard::RouteGuard;
use crate::components::search_box::SearchBox;
use crate::net::types::DashboardData;
use crate::state::auth::AuthState;
use crate::state::company::CompanyState;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let resolution = expect_context::<RwSignal<Resolution>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let company = expect_context::<RwSignal<CompanyState>>();
    install_role_redirects(session, resolution, use_navigate());

    let data = RwSignal::new(None::<DashboardData>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Refetch on every company change; ignore responses for a company that
    // is no longer selected.
    Effect::new(move || {
        let selected = company.get().current;
        if selected.is_empty() {
            data.set(None);
            return;
        }
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_company_data(&selected).await;
            if company.get_untracked().current != selected {
                return;
            }
            match result {
                Ok(payload) => data.set(Some(payload)),
                Err(message) => {
                    data.set(None);
                    error.set(Some(message));
                }
            }
            loading.set(false);
        });
    });

    // Dropping to unauthenticated lets the redirect orchestration carry the
    // user to the login page; no direct navigation here keeps this handler
    // copyable into the guard's children.
    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            session.set(SessionState::unauthenticated());
        });
    };

    let identity = move || {
        let state = auth.get();
        (state.name, state.role)
    };

    view! {
        <RouteGuard>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Company Dashboard"</h1>
                    <span class="dashboard-page__spacer"></span>
                    <span class="dashboard-page__self">
                        {move || identity().0}
                        " ("
                        {move || identity().1.as_str()}
                        ")"
                    </span>
                    <button class="dashboard-page__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <SearchBox/>

                <Show when=move || error.get().is_some()>
                    <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || {
                        view! {
                            <div class="dashboard-page__loading">
                                <LoadingSpinner/>
                                <p>"Loading company data..."</p>
                            </div>
                        }
                    }
                >
                    {move || match data.get() {
                        Some(payload) => view! { <MetricPanels data=payload/> }.into_any(),
                        None => {
                            view! {
                                <p class="dashboard-page__empty">
                                    "Search for a company to see its financial and ESG metrics."
                                </p>
                            }
                                .into_any()
                        }
                    }}
                </Show>

                <RoleSelector/>
            </div>
        </RouteGuard>
    }
}
