use super::*;

#[test]
fn switching_to_admin_on_user_dashboard_targets_admin_dashboard() {
    assert_eq!(
        switch_target(Role::Admin, "/dashboard"),
        Some(ADMIN_DASHBOARD_PATH)
    );
}

#[test]
fn switching_away_from_admin_targets_user_dashboard() {
    for role in [Role::User, Role::Subscriber] {
        assert_eq!(
            switch_target(role, "/admin/dashboard"),
            Some(USER_DASHBOARD_PATH),
            "role {role:?}"
        );
    }
}

#[test]
fn switching_on_a_non_dashboard_path_stays_put() {
    assert_eq!(switch_target(Role::Admin, "/"), None);
    assert_eq!(switch_target(Role::User, "/auth/login"), None);
}

#[test]
fn subscriber_and_user_share_the_user_dashboard() {
    assert_eq!(
        switch_target(Role::Subscriber, "/dashboard"),
        Some(USER_DASHBOARD_PATH)
    );
}
