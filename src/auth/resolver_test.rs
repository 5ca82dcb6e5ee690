use std::cell::Cell;

use super::*;
use crate::auth::role_store::MemoryRoleStore;

/// Wraps a [`MemoryRoleStore`] and counts persistence writes.
#[derive(Default)]
struct CountingStore {
    inner: MemoryRoleStore,
    saves: Cell<usize>,
}

impl RoleStore for CountingStore {
    fn load(&self) -> Option<Role> {
        self.inner.load()
    }

    fn save(&self, role: Role) {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(role);
    }
}

// =============================================================
// resolve: status handling
// =============================================================

#[test]
fn loading_emits_no_role_and_is_not_confirmed() {
    let res = resolve(SessionStatus::Loading, Some(Role::Admin), Some(Role::User));
    assert_eq!(res, Resolution::default());
    assert!(!res.is_confirmed);
}

#[test]
fn unauthenticated_confirms_with_no_role() {
    let res = resolve(SessionStatus::Unauthenticated, None, Some(Role::Admin));
    assert!(res.is_confirmed);
    assert_eq!(res.confirmed, None);
}

// =============================================================
// resolve: precedence (session > persisted > default)
// =============================================================

#[test]
fn session_role_wins_over_persisted_role() {
    let res = resolve(
        SessionStatus::Authenticated,
        Some(Role::Admin),
        Some(Role::Subscriber),
    );
    assert_eq!(res.confirmed, Some(Role::Admin));
    assert!(res.is_confirmed);
}

#[test]
fn persisted_role_fills_in_when_session_has_none() {
    let res = resolve(SessionStatus::Authenticated, None, Some(Role::Subscriber));
    assert_eq!(res.confirmed, Some(Role::Subscriber));
}

#[test]
fn missing_role_everywhere_falls_back_to_user() {
    let res = resolve(SessionStatus::Authenticated, None, None);
    assert_eq!(res.confirmed, Some(Role::User));
    assert!(res.is_confirmed);
}

// =============================================================
// resolve_and_cache: persistence and idempotence
// =============================================================

#[test]
fn resolved_role_is_cached_for_the_next_load() {
    let store = CountingStore::default();
    resolve_and_cache(SessionStatus::Authenticated, Some(Role::Admin), &store);
    assert_eq!(store.load(), Some(Role::Admin));
    assert_eq!(store.saves.get(), 1);
}

#[test]
fn repeated_identical_resolution_writes_only_once() {
    let store = CountingStore::default();
    let first = resolve_and_cache(SessionStatus::Authenticated, Some(Role::Subscriber), &store);
    let second = resolve_and_cache(SessionStatus::Authenticated, Some(Role::Subscriber), &store);
    assert_eq!(first, second);
    assert_eq!(store.saves.get(), 1);
}

#[test]
fn loading_and_unauthenticated_never_write_the_cache() {
    let store = CountingStore::default();
    resolve_and_cache(SessionStatus::Loading, Some(Role::Admin), &store);
    resolve_and_cache(SessionStatus::Unauthenticated, None, &store);
    assert_eq!(store.saves.get(), 0);
    assert_eq!(store.load(), None);
}

#[test]
fn cached_role_feeds_resolution_when_session_is_silent() {
    let store = CountingStore::default();
    store.inner.save(Role::Subscriber);
    let res = resolve_and_cache(SessionStatus::Authenticated, None, &store);
    assert_eq!(res.confirmed, Some(Role::Subscriber));
    // Value already cached, so no extra write.
    assert_eq!(store.saves.get(), 0);
}

#[test]
fn session_role_overwrites_a_stale_cache() {
    let store = CountingStore::default();
    store.inner.save(Role::User);
    let res = resolve_and_cache(SessionStatus::Authenticated, Some(Role::Admin), &store);
    assert_eq!(res.confirmed, Some(Role::Admin));
    assert_eq!(store.load(), Some(Role::Admin));
    assert_eq!(store.saves.get(), 1);
}
