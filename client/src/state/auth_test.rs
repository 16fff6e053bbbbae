use super::*;
use crate::routing::AuthSnapshot;

fn some_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

#[test]
fn default_state_is_signed_out_and_settled() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn resolving_state_is_loading() {
    let state = AuthState::resolving();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn snapshot_reflects_user_presence() {
    let signed_out = AuthState::default();
    assert!(!AuthSnapshot::of(&signed_out).authenticated);

    let signed_in = AuthState { user: Some(some_user()), loading: false };
    let snapshot = AuthSnapshot::of(&signed_in);
    assert!(snapshot.authenticated);
    assert!(!snapshot.loading);
}

#[test]
fn snapshot_carries_loading_flag() {
    assert!(AuthSnapshot::of(&AuthState::resolving()).loading);
}
