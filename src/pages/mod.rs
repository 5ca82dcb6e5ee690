//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, redirects, data
//! fetches) and delegates rendering details to `components`.

pub mod admin_dashboard;
pub mod dashboard;
pub mod home;
pub mod login;
