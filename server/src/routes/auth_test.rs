use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Alice@Example.COM  "), "alice@example.com");
}

#[test]
fn normalize_email_leaves_plain_addresses_alone() {
    assert_eq!(normalize_email("bob@example.com"), "bob@example.com");
}

// =============================================================================
// validate_registration
// =============================================================================

#[test]
fn validate_registration_accepts_good_input() {
    let (name, email) = validate_registration(" Alice ", " ALICE@example.com ", "longenough").unwrap();
    assert_eq!(name, "Alice");
    assert_eq!(email, "alice@example.com");
}

#[test]
fn validate_registration_requires_name() {
    let err = validate_registration("  ", "a@b.com", "longenough").unwrap_err();
    assert_eq!(err.to_string(), "invalid request: name required");
}

#[test]
fn validate_registration_requires_plausible_email() {
    let err = validate_registration("Alice", "nope", "longenough").unwrap_err();
    assert_eq!(err.to_string(), "invalid request: valid email required");
}

#[test]
fn validate_registration_enforces_password_length() {
    let err = validate_registration("Alice", "a@b.com", "short").unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("invalid request: password must be at least {MIN_PASSWORD_LEN} characters")
    );
}

#[test]
fn validate_registration_boundary_password_length() {
    assert!(validate_registration("Alice", "a@b.com", "exactly8").is_ok());
}

// =============================================================================
// session_cookie
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax_and_rooted() {
    let cookie = session_cookie("tok123".to_owned());
    assert_eq!(cookie.name(), "session_token");
    assert_eq!(cookie.value(), "tok123");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}
