use super::*;

fn signed_in() -> AuthSnapshot {
    AuthSnapshot { authenticated: true, loading: false }
}

fn signed_out() -> AuthSnapshot {
    AuthSnapshot { authenticated: false, loading: false }
}

// =============================================================================
// is_public_only
// =============================================================================

#[test]
fn login_and_register_are_public_only() {
    assert!(is_public_only("/login"));
    assert!(is_public_only("/register"));
}

#[test]
fn matching_is_case_sensitive() {
    assert!(!is_public_only("/Login"));
    assert!(!is_public_only("/REGISTER"));
}

#[test]
fn matching_is_exact_not_prefix() {
    assert!(!is_public_only("/login/"));
    assert!(!is_public_only("/login/reset"));
    assert!(!is_public_only("/registering"));
}

// =============================================================================
// decide_protected
// =============================================================================

#[test]
fn signed_out_is_sent_to_login_from_any_other_path() {
    for path in ["/dashboard", "/", "/settings", "/Login", "/login/extra"] {
        let decision = decide_protected(signed_out(), &RouteContext::new(path));
        assert_eq!(decision, RedirectDecision::RedirectTo(LOGIN_PATH), "path {path}");
    }
}

#[test]
fn signed_out_stays_on_public_only_paths() {
    for path in ["/login", "/register"] {
        let decision = decide_protected(signed_out(), &RouteContext::new(path));
        assert_eq!(decision, RedirectDecision::None, "path {path}");
    }
}

#[test]
fn signed_in_is_bounced_off_public_only_paths() {
    for path in ["/login", "/register"] {
        let decision = decide_protected(signed_in(), &RouteContext::new(path));
        assert_eq!(decision, RedirectDecision::RedirectTo(DASHBOARD_PATH), "path {path}");
    }
}

#[test]
fn signed_in_renders_dashboard_in_place() {
    let decision = decide_protected(signed_in(), &RouteContext::new("/dashboard"));
    assert_eq!(decision, RedirectDecision::None);
}

#[test]
fn loading_does_not_change_the_protected_decision() {
    let loading_out = AuthSnapshot { authenticated: false, loading: true };
    let decision = decide_protected(loading_out, &RouteContext::new("/dashboard"));
    assert_eq!(decision, RedirectDecision::RedirectTo(LOGIN_PATH));

    let loading_in = AuthSnapshot { authenticated: true, loading: true };
    let decision = decide_protected(loading_in, &RouteContext::new("/dashboard"));
    assert_eq!(decision, RedirectDecision::None);
}

#[test]
fn default_snapshot_fails_safe_to_login_redirect() {
    let decision = decide_protected(AuthSnapshot::default(), &RouteContext::new("/dashboard"));
    assert_eq!(decision, RedirectDecision::RedirectTo(LOGIN_PATH));
}

// =============================================================================
// decide_public
// =============================================================================

#[test]
fn public_gate_shows_placeholder_while_loading_regardless_of_auth() {
    for authenticated in [false, true] {
        let gate = decide_public(AuthSnapshot { authenticated, loading: true });
        assert_eq!(gate, PublicGate::Placeholder, "authenticated {authenticated}");
    }
}

#[test]
fn public_gate_replace_redirects_signed_in_users() {
    assert_eq!(decide_public(signed_in()), PublicGate::Replace(DASHBOARD_PATH));
}

#[test]
fn public_gate_renders_children_for_signed_out_users() {
    assert_eq!(decide_public(signed_out()), PublicGate::Children);
}

// =============================================================================
// RedirectEffector
// =============================================================================

#[test]
fn effector_navigates_on_first_evaluation() {
    let mut effector = RedirectEffector::new();
    let mut targets = Vec::new();
    let route = RouteContext::new("/dashboard");

    effector.apply(signed_out(), &route, |t| targets.push(t.to_owned()));
    assert_eq!(targets, vec!["/login"]);
}

#[test]
fn effector_does_not_renavigate_for_unchanged_inputs() {
    let mut effector = RedirectEffector::new();
    let mut count = 0;
    let route = RouteContext::new("/dashboard");

    effector.apply(signed_out(), &route, |_| count += 1);
    let repeat = effector.apply(signed_out(), &route, |_| count += 1);

    assert_eq!(count, 1);
    assert_eq!(repeat, RedirectDecision::None);
}

#[test]
fn effector_navigates_again_when_path_changes() {
    let mut effector = RedirectEffector::new();
    let mut targets = Vec::new();

    effector.apply(signed_out(), &RouteContext::new("/dashboard"), |t| targets.push(t.to_owned()));
    effector.apply(signed_out(), &RouteContext::new("/settings"), |t| targets.push(t.to_owned()));

    assert_eq!(targets, vec!["/login", "/login"]);
}

#[test]
fn effector_navigates_again_when_auth_flips() {
    let mut effector = RedirectEffector::new();
    let mut targets = Vec::new();
    let route = RouteContext::new("/login");

    // Signed out on /login: nothing to do, but the pair is recorded.
    let first = effector.apply(signed_out(), &route, |t| targets.push(t.to_owned()));
    assert_eq!(first, RedirectDecision::None);
    assert!(targets.is_empty());

    // Signing in while on /login bounces to the dashboard.
    effector.apply(signed_in(), &route, |t| targets.push(t.to_owned()));
    assert_eq!(targets, vec!["/dashboard"]);
}

#[test]
fn effector_ignores_loading_only_changes() {
    let mut effector = RedirectEffector::new();
    let mut count = 0;
    let route = RouteContext::new("/dashboard");

    effector.apply(AuthSnapshot { authenticated: false, loading: true }, &route, |_| count += 1);
    effector.apply(AuthSnapshot { authenticated: false, loading: false }, &route, |_| count += 1);

    assert_eq!(count, 1);
}

#[test]
fn effector_records_inputs_even_when_no_redirect_is_needed() {
    let mut effector = RedirectEffector::new();
    let mut count = 0;
    let route = RouteContext::new("/dashboard");

    effector.apply(signed_in(), &route, |_| count += 1);
    effector.apply(signed_in(), &route, |_| count += 1);
    assert_eq!(count, 0);

    // Logging out on the same path is an input change and must navigate.
    effector.apply(signed_out(), &route, |_| count += 1);
    assert_eq!(count, 1);
}
