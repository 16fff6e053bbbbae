use super::*;

#[test]
fn validate_registration_accepts_good_input() {
    let input = validate_registration_input(" Alice ", " alice@example.com ", "longenough", "longenough")
        .expect("input should validate");
    assert_eq!(input.name, "Alice");
    assert_eq!(input.email, "alice@example.com");
    assert_eq!(input.password, "longenough");
}

#[test]
fn validate_registration_requires_name() {
    let err = validate_registration_input("   ", "a@b.com", "longenough", "longenough").unwrap_err();
    assert_eq!(err, "Enter a display name.");
}

#[test]
fn validate_registration_requires_plausible_email() {
    let err = validate_registration_input("Alice", "not-an-email", "longenough", "longenough").unwrap_err();
    assert_eq!(err, "Enter a valid email address.");
}

#[test]
fn validate_registration_enforces_password_length() {
    let err = validate_registration_input("Alice", "a@b.com", "short", "short").unwrap_err();
    assert_eq!(err, "Password must be at least 8 characters.");
}

#[test]
fn validate_registration_requires_matching_confirmation() {
    let err = validate_registration_input("Alice", "a@b.com", "longenough", "different").unwrap_err();
    assert_eq!(err, "Passwords do not match.");
}
