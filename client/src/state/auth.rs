//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated once at startup from the session endpoint and mutated by the
//! login, register, and logout flows. Route guards read it through
//! [`crate::routing::AuthSnapshot`]; they never write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State for a session lookup that has not resolved yet.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }
}
