//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::resolver::{Resolution, install_role_resolution};
use crate::auth::session_sync::{install_session_sync, load_session};
use crate::pages::{
    admin_dashboard::AdminDashboardPage, dashboard::DashboardPage, home::HomePage,
    login::LoginPage,
};
use crate::state::{auth::AuthState, company::CompanyState, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, wires the session/role pipeline,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let auth = RwSignal::new(AuthState::default());
    let company = RwSignal::new(CompanyState::default());
    let resolution = RwSignal::new(Resolution::default());

    provide_context(session);
    provide_context(auth);
    provide_context(company);
    provide_context(resolution);

    // Session changes flow into the identity snapshot and the confirmed
    // role before any page-level redirect can act on them.
    install_session_sync(session, auth);
    install_role_resolution(session, resolution);
    load_session(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/esglens.css"/>
        <Title text="ESG Lens"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=AdminDashboardPage
                />
            </Routes>
        </Router>
    }
}
