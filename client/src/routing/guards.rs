//! Guard components wrapping routed pages.
//!
//! DESIGN
//! ======
//! The two guards are intentionally asymmetric and must stay that way:
//!
//! - `AuthGuard` always renders its children and issues any redirect as an
//!   imperative side effect (render-then-redirect). A brief flash of the
//!   protected page before the router settles is accepted behavior.
//! - `PublicRoute` gates on the session-loading flag first, withholds its
//!   children while a redirect is pending, and redirects declaratively
//!   with a replacing navigation so login/register never enter history in
//!   front of the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::decision::{
    AuthSnapshot, PublicGate, RedirectEffector, RouteContext, decide_public,
};
use crate::state::auth::AuthState;

/// Wraps protected routes. Children render unconditionally; an effect
/// watches the auth session and the location and navigates when the guard
/// decides to, at most once per input change.
#[component]
pub fn AuthGuard(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let effector = StoredValue::new(RedirectEffector::new());

    Effect::new(move || {
        let snapshot = AuthSnapshot::of(&auth.get());
        let route = RouteContext::new(location.pathname.get());
        effector.update_value(|e| {
            e.apply(snapshot, &route, |target| {
                navigate(target, NavigateOptions::default());
            });
        });
    });

    children()
}

/// Wraps public-only routes (login, register). Shows a placeholder while
/// the session lookup is in flight, replace-redirects signed-in users to
/// the dashboard, and renders children otherwise.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || match decide_public(AuthSnapshot::of(&auth.get())) {
            PublicGate::Placeholder => view! {
                <div class="auth-gate">
                    <p class="auth-gate__message">"Loading..."</p>
                </div>
            }
            .into_any(),
            PublicGate::Replace(target) => view! { <ReplaceRedirect path=target/> }.into_any(),
            PublicGate::Children => children(),
        }}
    }
}

/// Declarative replacing redirect: requests navigation when mounted,
/// overwriting the current history entry instead of pushing a new one.
#[component]
fn ReplaceRedirect(path: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate(path, NavigateOptions { replace: true, ..Default::default() });
    });
}
