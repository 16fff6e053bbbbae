//! Pure route-authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guard components delegate here. Decisions are pure functions of an
//! `AuthSnapshot` and (for protected routes) a `RouteContext`, so redirect
//! behavior can be tested without a router or a reactive runtime.
//!
//! INVARIANTS
//! ==========
//! - Exempt-path matching is literal, case-sensitive, and exact.
//! - A decision never depends on prior decisions. The only stateful piece
//!   is `RedirectEffector`, which remembers the last observed input pair
//!   (never a decision) to keep redirect issuance idempotent.

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use crate::state::auth::AuthState;

/// Path of the login page. Unauthenticated users land here.
pub const LOGIN_PATH: &str = "/login";
/// Path of the registration page.
pub const REGISTER_PATH: &str = "/register";
/// Authenticated landing page.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Guard-facing projection of the auth session state.
///
/// The default value is unauthenticated and not loading, which fails safe
/// to the login redirect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    /// Whether a signed-in user is present.
    pub authenticated: bool,
    /// Whether the session lookup is still in flight.
    pub loading: bool,
}

impl AuthSnapshot {
    #[must_use]
    pub fn of(auth: &AuthState) -> Self {
        Self { authenticated: auth.user.is_some(), loading: auth.loading }
    }
}

/// The location a guard evaluates against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteContext {
    /// Current pathname, as reported by the router.
    pub path: String,
}

impl RouteContext {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Outcome of evaluating the protected-route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Render children as-is.
    None,
    /// Navigate to the given path.
    RedirectTo(&'static str),
}

/// Outcome of evaluating the public-route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicGate {
    /// Session lookup still pending: show a placeholder, no redirect.
    Placeholder,
    /// Already signed in: replace-navigate to the given path, withholding
    /// children while the redirect is pending.
    Replace(&'static str),
    /// Render children.
    Children,
}

/// Whether a path is reserved for signed-out visitors.
///
/// Matching is exact: `/Login` and `/login/anything` are ordinary
/// protected paths.
#[must_use]
pub fn is_public_only(path: &str) -> bool {
    path == LOGIN_PATH || path == REGISTER_PATH
}

/// Decide what the protected-route guard should do.
///
/// Signed-in users are bounced off the public-only pages to the dashboard;
/// signed-out users are sent to login from everywhere else. The `loading`
/// flag is deliberately not consulted here; only the public guard gates on
/// it.
#[must_use]
pub fn decide_protected(auth: AuthSnapshot, route: &RouteContext) -> RedirectDecision {
    if auth.authenticated && is_public_only(&route.path) {
        RedirectDecision::RedirectTo(DASHBOARD_PATH)
    } else if !auth.authenticated && !is_public_only(&route.path) {
        RedirectDecision::RedirectTo(LOGIN_PATH)
    } else {
        RedirectDecision::None
    }
}

/// Decide what the public-route guard should do.
#[must_use]
pub fn decide_public(auth: AuthSnapshot) -> PublicGate {
    if auth.loading {
        PublicGate::Placeholder
    } else if auth.authenticated {
        PublicGate::Replace(DASHBOARD_PATH)
    } else {
        PublicGate::Children
    }
}

/// Issues protected-route redirects at most once per input change.
///
/// Reactive effects re-run whenever any tracked signal changes, including
/// changes that leave `(authenticated, path)` untouched. The effector
/// remembers the last pair it acted on and suppresses the navigation side
/// effect until the pair actually changes, so a same-input re-evaluation
/// never re-triggers navigation.
#[derive(Debug, Default)]
pub struct RedirectEffector {
    last: Option<(bool, String)>,
}

impl RedirectEffector {
    #[must_use]
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Evaluate the guard for the given inputs and, when they differ from
    /// the previously observed pair, perform any redirect through
    /// `navigate`. Returns the decision that was applied on this call;
    /// suppressed (unchanged-input) evaluations report
    /// [`RedirectDecision::None`].
    pub fn apply<F>(&mut self, auth: AuthSnapshot, route: &RouteContext, mut navigate: F) -> RedirectDecision
    where
        F: FnMut(&str),
    {
        let key = (auth.authenticated, route.path.clone());
        if self.last.as_ref() == Some(&key) {
            return RedirectDecision::None;
        }
        self.last = Some(key);

        let decision = decide_protected(auth, route);
        if let RedirectDecision::RedirectTo(target) = decision {
            navigate(target);
        }
        decision
    }
}
