//! REST API helpers for communicating with the backend gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and data
//! fetch failures degrade to UI loading/error states without crashing
//! hydration. Session fetch failures in particular collapse to `None`, which
//! the session loader treats as unauthenticated; no retries are attempted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AdminUser, DashboardData, SessionPayload};

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Sign-in failed. Check your email and password.".to_owned()
    } else {
        format!("sign-in request failed: {status}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn company_list_failed_message(status: u16) -> String {
    format!("company list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn company_data_failed_message(status: u16) -> String {
    format!("company data request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_users_failed_message(status: u16) -> String {
    format!("admin user request failed: {status}")
}

/// Fetch the current session from `/api/auth/session`.
///
/// Returns `None` when no session exists, on any provider/network failure,
/// or on the server. Callers treat all of these as unauthenticated.
pub async fn fetch_session() -> Option<SessionPayload> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionPayload>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with credentials via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-presentable error string if the HTTP request fails or the
/// server rejects the credentials.
pub async fn login(email: &str, password: &str) -> Result<SessionPayload, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<SessionPayload>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`. Best-effort.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch the searchable company list from `/api/dashboard/companies`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status; callers fall back to the bundled company list.
pub async fn fetch_company_list() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/dashboard/companies")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(company_list_failed_message(resp.status()));
        }
        resp.json::<Vec<String>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch dashboard metrics for `company` via `POST /api/dashboard/company`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_company_data(company: &str) -> Result<DashboardData, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "company_name": company });
        let resp = gloo_net::http::Request::post("/api/dashboard/company")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(company_data_failed_message(resp.status()));
        }
        resp.json::<DashboardData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = company;
        Err("not available on server".to_owned())
    }
}

/// Fetch the user list for the admin dashboard from `/api/admin/users`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_admin_users() -> Result<Vec<AdminUser>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/users")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(admin_users_failed_message(resp.status()));
        }
        resp.json::<Vec<AdminUser>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
