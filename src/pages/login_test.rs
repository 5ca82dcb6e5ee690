use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  kim@example.com  ", "secret"),
        Ok(("kim@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "secret"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("kim@example.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_preserves_password_whitespace() {
    // Passwords are taken verbatim; only the email is trimmed.
    assert_eq!(
        validate_login_input("a@b.com", " pass "),
        Ok(("a@b.com".to_owned(), " pass ".to_owned()))
    );
}
