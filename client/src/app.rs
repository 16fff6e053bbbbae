//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::routing::guards::{AuthGuard, PublicRoute};
use crate::state::{auth::AuthState, services::ServicesState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the current session once
/// at startup, and sets up client-side routing with the two guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    let services = RwSignal::new(ServicesState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(services);
    provide_context(ui);

    // One session lookup per page load; guards hold off (public routes) or
    // render-then-redirect (protected routes) until it resolves.
    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.update(|a| a.loading = false);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/pulseboard.css"/>
        <Title text="Pulseboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <PublicRoute><RegisterPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <AuthGuard><DashboardPage/></AuthGuard> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <AuthGuard><DashboardPage/></AuthGuard> }
                />
            </Routes>
        </Router>
    }
}
