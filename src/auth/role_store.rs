//! Persistence port for the last known user role.
//!
//! DESIGN
//! ======
//! The persisted role is a single cell that caches the most recent resolved
//! role across reloads, so a returning user sees role-appropriate routing
//! before the session fetch completes. The port keeps the resolver pure and
//! testable; the browser impl is the only place localStorage is touched.
//! Writes are last-write-wins and only ever happen on the UI thread.

#[cfg(test)]
#[path = "role_store_test.rs"]
mod role_store_test;

use std::cell::Cell;

use crate::state::auth::Role;
use crate::util::persistence;

const STORAGE_KEY: &str = "esglens_user_role";

/// Durable get/set access to the cached role.
pub trait RoleStore {
    /// Last persisted role, `None` when nothing was cached yet.
    fn load(&self) -> Option<Role>;
    /// Persist `role` as the new cached value.
    fn save(&self, role: Role);
}

/// localStorage-backed store used in the browser; no-ops during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRoleStore;

impl RoleStore for BrowserRoleStore {
    fn load(&self) -> Option<Role> {
        persistence::load_json::<Role>(STORAGE_KEY)
    }

    fn save(&self, role: Role) {
        persistence::save_json(STORAGE_KEY, &role);
    }
}

/// In-memory store for tests and non-browser rendering.
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    role: Cell<Option<Role>>,
}

impl RoleStore for MemoryRoleStore {
    fn load(&self) -> Option<Role> {
        self.role.get()
    }

    fn save(&self, role: Role) {
        self.role.set(Some(role));
    }
}
