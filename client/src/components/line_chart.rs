//! Latency line chart.
//!
//! DESIGN
//! ======
//! Chart geometry is computed by pure string-building helpers so the
//! mapping from samples to SVG coordinates is testable without a DOM. The
//! component itself only mounts the generated markup.

#[cfg(test)]
#[path = "line_chart_test.rs"]
mod line_chart_test;

use leptos::prelude::*;

use crate::net::types::SamplePoint;

/// Drawing-surface size in CSS pixels.
pub const CHART_WIDTH: f64 = 560.0;
pub const CHART_HEIGHT: f64 = 160.0;

const CHART_PAD: f64 = 8.0;

/// Map successful samples onto `x,y` pairs for an SVG `<polyline>`.
///
/// The x axis spreads samples evenly across the surface; the y axis is
/// scaled to the slowest retained probe. Failed probes carry no latency
/// and are skipped. Returns an empty string when nothing is drawable.
#[must_use]
pub fn polyline_points(samples: &[SamplePoint], width: f64, height: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let values: Vec<f64> = samples
        .iter()
        .filter_map(|s| s.latency_ms)
        .map(|v| v as f64)
        .collect();
    if values.is_empty() {
        return String::new();
    }

    let max = values.iter().fold(1.0_f64, |acc, v| acc.max(*v));
    let inner_w = width - 2.0 * CHART_PAD;
    let inner_h = height - 2.0 * CHART_PAD;
    let n = values.len();

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            #[allow(clippy::cast_precision_loss)]
            let fx = if n == 1 { 0.5 } else { i as f64 / (n - 1) as f64 };
            let x = CHART_PAD + fx * inner_w;
            let y = CHART_PAD + (1.0 - v / max) * inner_h;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the full chart SVG for the given samples.
#[must_use]
pub fn chart_svg(samples: &[SamplePoint], width: f64, height: f64) -> String {
    let points = polyline_points(samples, width, height);
    let baseline_y = height - CHART_PAD;
    format!(
        concat!(
            "<svg class=\"line-chart__svg\" width=\"{w}\" height=\"{h}\" role=\"img\">",
            "<line class=\"line-chart__baseline\" x1=\"{pad}\" y1=\"{by}\" x2=\"{bx}\" y2=\"{by}\"/>",
            "<polyline class=\"line-chart__line\" fill=\"none\" points=\"{points}\"/>",
            "</svg>"
        ),
        w = width,
        h = height,
        pad = CHART_PAD,
        by = baseline_y,
        bx = width - CHART_PAD,
        points = points,
    )
}

/// Latency chart for the selected service.
#[component]
pub fn LineChart(samples: Vec<SamplePoint>) -> impl IntoView {
    if samples.iter().all(|s| s.latency_ms.is_none()) {
        view! { <p class="line-chart__empty">"No samples yet."</p> }.into_any()
    } else {
        let markup = chart_svg(&samples, CHART_WIDTH, CHART_HEIGHT);
        view! { <div class="line-chart" inner_html=markup></div> }.into_any()
    }
}
