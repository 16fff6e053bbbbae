//! Display formatting for dashboard values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a probe latency for a card or chart caption.
#[must_use]
pub fn format_latency(latency_ms: Option<u64>) -> String {
    match latency_ms {
        Some(ms) if ms >= 1000 => {
            #[allow(clippy::cast_precision_loss)]
            let secs = ms as f64 / 1000.0;
            format!("{secs:.1} s")
        }
        Some(ms) => format!("{ms} ms"),
        None => "—".to_owned(),
    }
}

/// Format an uptime percentage with one decimal place.
#[must_use]
pub fn format_uptime(uptime_pct: f64) -> String {
    format!("{uptime_pct:.1}%")
}
