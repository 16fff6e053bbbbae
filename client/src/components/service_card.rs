//! Card summarizing one monitored service.

use leptos::prelude::*;

use crate::net::types::ServiceSummary;
use crate::util::format::{format_latency, format_uptime};

/// Clickable service summary; selecting a card drives the chart panel.
#[component]
pub fn ServiceCard(summary: ServiceSummary, selected: bool, on_select: Callback<String>) -> impl IntoView {
    let name = summary.name.clone();
    let status = summary.status;
    let card_class = if selected {
        "service-card service-card--selected"
    } else {
        "service-card"
    };
    let pill_class = format!("service-card__pill service-card__pill--{}", status.css_class());

    view! {
        <button class=card_class on:click=move |_| on_select.run(name.clone())>
            <div class="service-card__row">
                <span class="service-card__name">{summary.name.clone()}</span>
                <span class=pill_class>{status.label()}</span>
            </div>
            <div class="service-card__row service-card__row--metrics">
                <span class="service-card__latency">{format_latency(summary.latency_ms)}</span>
                <span class="service-card__uptime">{format_uptime(summary.uptime_pct)}</span>
            </div>
            <span class="service-card__url">{summary.url.clone()}</span>
        </button>
    }
}
