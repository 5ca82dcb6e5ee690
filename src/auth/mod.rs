//! Session-to-role mapping and route redirect orchestration.
//!
//! ARCHITECTURE
//! ============
//! `session_sync` bridges the session source into the auth store, `resolver`
//! derives the confirmed role (with a persisted fallback behind the
//! `role_store` port), and `redirect` turns status + role + path into at most
//! one navigation per decision cycle. The decision functions are pure; only
//! the `install_*` helpers touch signals and the router.

pub mod redirect;
pub mod resolver;
pub mod role_store;
pub mod session_sync;
