use super::*;

#[test]
fn login_failed_message_is_presentable_for_unauthorized() {
    assert_eq!(
        login_failed_message(401),
        "Sign-in failed. Check your email and password."
    );
}

#[test]
fn login_failed_message_formats_other_statuses() {
    assert_eq!(login_failed_message(502), "sign-in request failed: 502");
}

#[test]
fn company_list_failed_message_formats_status() {
    assert_eq!(company_list_failed_message(503), "company list request failed: 503");
}

#[test]
fn company_data_failed_message_formats_status() {
    assert_eq!(company_data_failed_message(404), "company data request failed: 404");
}

#[test]
fn admin_users_failed_message_formats_status() {
    assert_eq!(admin_users_failed_message(403), "admin user request failed: 403");
}
