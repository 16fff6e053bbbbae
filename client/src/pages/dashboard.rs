//! Dashboard page: fleet overview, service cards, latency chart.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads service summaries
//! over REST, refreshes them on a fixed interval, opens the realtime
//! status channel, and coordinates card-selection -> chart flow. Access
//! control is the auth guard's job; this page renders unconditionally and
//! lets failed fetches surface as inline errors.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::globe::GlobePanel;
use crate::components::line_chart::LineChart;
use crate::components::service_card::ServiceCard;
use crate::net::types::StatusOverview;
use crate::state::auth::AuthState;
use crate::state::services::ServicesState;
use crate::state::ui::UiState;

fn services_up_label(overview: &StatusOverview) -> String {
    format!("{} / {} services up", overview.services_up, overview.services_total)
}

fn viewers_label(overview: &StatusOverview) -> String {
    match overview.realtime_clients {
        1 => "1 live viewer".to_owned(),
        n => format!("{n} live viewers"),
    }
}

/// Fetch summaries, fleet counters, and the selected service's history.
#[cfg(feature = "hydrate")]
async fn refresh_dashboard(services: RwSignal<ServicesState>) {
    match crate::net::api::fetch_services().await {
        Ok(items) => services.update(|s| s.set_items(items)),
        Err(e) => services.update(|s| {
            s.loading = false;
            s.error = Some(e);
        }),
    }

    if let Some(overview) = crate::net::api::fetch_overview().await {
        services.update(|s| s.overview = Some(overview));
    }

    if let Some(name) = services.get_untracked().selected {
        if let Ok(points) = crate::net::api::fetch_service_history(&name).await {
            services.update(|s| {
                if s.selected.as_deref() == Some(name.as_str()) {
                    s.history = points;
                }
            });
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<RwSignal<ServicesState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        services.update(|s| s.loading = true);
        crate::net::channel::open_status_channel(ui);
        leptos::task::spawn_local(async move {
            refresh_dashboard(services).await;
        });

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(10)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_dashboard(services).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Refetch history when the card selection changes. The memo keeps
    // unrelated `ServicesState` updates from re-triggering the fetch.
    let selected = Memo::new(move |_| services.get().selected);
    Effect::new(move || {
        let Some(name) = selected.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Ok(points) = crate::net::api::fetch_service_history(&name).await {
                    services.update(|s| {
                        if s.selected.as_deref() == Some(name.as_str()) {
                            s.history = points;
                        }
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    });

    let on_select = Callback::new(move |name: String| {
        services.update(|s| {
            if s.selected.as_deref() != Some(name.as_str()) {
                s.selected = Some(name);
                s.history.clear();
            }
        });
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                // Dropping the user flips the auth guard, which navigates
                // back to the login page.
                auth.update(|a| a.user = None);
            });
        }
    };

    let self_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let realtime_class = move || {
        if ui.get().realtime_connected {
            "toolbar__realtime toolbar__realtime--on"
        } else {
            "toolbar__realtime"
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Pulseboard"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class=realtime_class>
                    {move || if ui.get().realtime_connected { "Live" } else { "Offline" }}
                </span>

                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <span class="toolbar__self">{self_name}</span>

                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__stats">
                {move || {
                    services.get().overview.map(|o| {
                        view! {
                            <span class="stat stat--services">{services_up_label(&o)}</span>
                            <span class="stat stat--viewers">{viewers_label(&o)}</span>
                        }
                    })
                }}
            </div>

            <Show when=move || services.get().error.is_some()>
                <p class="dashboard-page__error">
                    {move || services.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !services.get().loading
                fallback=move || view! { <p>"Loading services..."</p> }
            >
                <div class="dashboard-page__cards">
                    {move || {
                        let state = services.get();
                        let current = state.selected.clone();
                        state
                            .items
                            .into_iter()
                            .map(|summary| {
                                let is_selected = current.as_deref() == Some(summary.name.as_str());
                                view! {
                                    <ServiceCard
                                        summary=summary
                                        selected=is_selected
                                        on_select=on_select
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <div class="dashboard-page__panels">
                <section class="panel panel--chart">
                    <h2 class="panel__title">
                        {move || services.get().selected.unwrap_or_else(|| "Latency".to_owned())}
                    </h2>
                    {move || view! { <LineChart samples=services.get().history/> }}
                </section>
                <section class="panel panel--globe">
                    <GlobePanel/>
                </section>
            </div>
        </div>
    }
}
