//! Service-health monitor.
//!
//! DESIGN
//! ======
//! A single background task probes every configured target over HTTP on a
//! fixed interval and records the results into the shared health store.
//! Classification and summarization are pure functions over the stored
//! samples so the API handlers and tests share one definition of "up".
//!
//! CONFIGURATION
//! =============
//! Targets come from a YAML file (`MONITOR_CONFIG` points at it) or from
//! the inline `SERVICE_TARGETS` variable (`name=url` pairs separated by
//! commas). Interval, degraded threshold, and probe timeout have their own
//! variables with sensible defaults.

use std::collections::VecDeque;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::state::{AppState, Sample};

const DEFAULT_INTERVAL_SECS: u64 = 30;
const DEFAULT_DEGRADED_MS: u64 = 1000;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// One monitored endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorTarget {
    /// Unique display name.
    pub name: String,
    /// URL probed with a plain GET.
    pub url: String,
}

/// Monitor settings resolved at startup.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub targets: Vec<MonitorTarget>,
    pub interval: Duration,
    /// Latency above this many milliseconds classifies a service as
    /// degraded even when probes succeed.
    pub degraded_ms: u64,
    pub probe_timeout: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            degraded_ms: DEFAULT_DEGRADED_MS,
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    services: Vec<MonitorTarget>,
}

/// Parse the inline `SERVICE_TARGETS` format: comma-separated `name=url`
/// pairs. Malformed entries are skipped.
#[must_use]
pub fn parse_inline_targets(raw: &str) -> Vec<MonitorTarget> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let (name, url) = entry.split_once('=')?;
            let (name, url) = (name.trim(), url.trim());
            if name.is_empty() || url.is_empty() {
                return None;
            }
            Some(MonitorTarget { name: name.to_owned(), url: url.to_owned() })
        })
        .collect()
}

/// Parse the YAML config file format.
///
/// # Errors
///
/// Returns the underlying YAML error for malformed input.
pub fn parse_config_file(raw: &str) -> Result<Vec<MonitorTarget>, serde_yaml::Error> {
    let file: ConfigFile = serde_yaml::from_str(raw)?;
    Ok(file.services)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

/// Resolve the monitor configuration from the environment.
///
/// Missing or unreadable target configuration yields an empty fleet with a
/// warning rather than a startup failure; the dashboard simply has nothing
/// to show.
#[must_use]
pub fn load_config() -> MonitorConfig {
    let targets = if let Ok(path) = std::env::var("MONITOR_CONFIG") {
        match std::fs::read_to_string(&path) {
            Ok(raw) => match parse_config_file(&raw) {
                Ok(targets) => targets,
                Err(e) => {
                    warn!(%path, error = %e, "monitor config file invalid; no targets loaded");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(%path, error = %e, "monitor config file unreadable; no targets loaded");
                Vec::new()
            }
        }
    } else if let Ok(raw) = std::env::var("SERVICE_TARGETS") {
        parse_inline_targets(&raw)
    } else {
        warn!("neither MONITOR_CONFIG nor SERVICE_TARGETS set; no targets loaded");
        Vec::new()
    };

    MonitorConfig {
        targets,
        interval: Duration::from_secs(env_u64("MONITOR_INTERVAL_SECS", DEFAULT_INTERVAL_SECS)),
        degraded_ms: env_u64("MONITOR_DEGRADED_MS", DEFAULT_DEGRADED_MS),
        probe_timeout: Duration::from_secs(env_u64("MONITOR_PROBE_TIMEOUT_SECS", DEFAULT_PROBE_TIMEOUT_SECS)),
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Health classification of a monitored service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Up,
    Degraded,
    Down,
    /// No probe has completed yet.
    Unknown,
}

/// Classify a service from its most recent sample.
#[must_use]
pub fn classify(latest: Option<&Sample>, degraded_ms: u64) -> ServiceStatus {
    match latest {
        None => ServiceStatus::Unknown,
        Some(sample) if !sample.ok => ServiceStatus::Down,
        Some(sample) => {
            if sample.latency_ms.is_some_and(|ms| ms > degraded_ms) {
                ServiceStatus::Degraded
            } else {
                ServiceStatus::Up
            }
        }
    }
}

/// Share of successful probes over the retained window, 0..=100.
/// An empty window counts as fully up: nothing has failed yet.
#[must_use]
pub fn uptime_pct(samples: &VecDeque<Sample>) -> f64 {
    if samples.is_empty() {
        return 100.0;
    }
    let ok = samples.iter().filter(|s| s.ok).count();
    #[allow(clippy::cast_precision_loss)]
    {
        ok as f64 / samples.len() as f64 * 100.0
    }
}

/// One monitored service as returned by `GET /api/services`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSummary {
    pub name: String,
    pub url: String,
    pub status: ServiceStatus,
    pub latency_ms: Option<u64>,
    pub uptime_pct: f64,
    pub checked_at: Option<i64>,
}

/// Build the card-level summary for one service.
#[must_use]
pub fn summarize(health: &crate::state::ServiceHealth, degraded_ms: u64) -> ServiceSummary {
    let latest = health.latest();
    ServiceSummary {
        name: health.target.name.clone(),
        url: health.target.url.clone(),
        status: classify(latest, degraded_ms),
        latency_ms: latest.and_then(|s| s.latency_ms),
        uptime_pct: uptime_pct(&health.samples),
        checked_at: latest.map(|s| s.ts),
    }
}

// =============================================================================
// PROBING
// =============================================================================

#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Probe one URL; returns success and round-trip latency in milliseconds.
async fn probe_once(client: &reqwest::Client, url: &str) -> (bool, u64) {
    let started = Instant::now();
    let ok = match client.get(url).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    };
    #[allow(clippy::cast_possible_truncation)]
    let latency = started.elapsed().as_millis() as u64;
    (ok, latency)
}

/// Spawn the background probe loop. Runs for the life of the process;
/// exits immediately when no targets are configured.
pub fn spawn_monitor_task(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        if state.monitor.targets.is_empty() {
            info!("monitor: no targets configured, probe loop idle");
            return;
        }

        let client = match reqwest::Client::builder().timeout(state.monitor.probe_timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "monitor: HTTP client init failed, probe loop disabled");
                return;
            }
        };

        let mut interval = tokio::time::interval(state.monitor.interval);
        loop {
            interval.tick().await;

            // Fleets are small; probing sequentially keeps the load gentle.
            for target in &state.monitor.targets {
                let (ok, latency) = probe_once(&client, &target.url).await;
                let sample = Sample { ts: now_ms(), ok, latency_ms: ok.then_some(latency) };

                let mut health = state.health.write().await;
                let Some(entry) = health.iter_mut().find(|h| h.target.name == target.name) else {
                    continue;
                };
                let before = classify(entry.latest(), state.monitor.degraded_ms);
                entry.record(sample);
                let after = classify(entry.latest(), state.monitor.degraded_ms);
                if before != after {
                    info!(service = %target.name, from = ?before, to = ?after, "monitor: status change");
                }
            }
        }
    })
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod tests;
