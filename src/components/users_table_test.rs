use super::*;

#[test]
fn role_badge_classes_are_distinct_per_role() {
    assert_eq!(role_badge_class(Role::Admin), "badge--primary");
    assert_eq!(role_badge_class(Role::Subscriber), "badge--success");
    assert_eq!(role_badge_class(Role::User), "badge--warning");
}
