//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's JSON payloads so serde
//! round-trips stay lossless without a shared schema crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}

/// Health classification of a monitored service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Up,
    Degraded,
    Down,
    /// No probe has completed yet.
    Unknown,
}

impl ServiceStatus {
    /// CSS modifier used by status pills and cards.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Degraded => "degraded",
            Self::Down => "down",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "Operational",
            Self::Degraded => "Degraded",
            Self::Down => "Down",
            Self::Unknown => "Unknown",
        }
    }
}

/// One monitored service as shown on a dashboard card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Configured service name (unique).
    pub name: String,
    /// Probed URL.
    pub url: String,
    /// Current health classification.
    pub status: ServiceStatus,
    /// Latency of the most recent successful probe, in milliseconds.
    pub latency_ms: Option<u64>,
    /// Share of successful probes over the retained window, 0..=100.
    pub uptime_pct: f64,
    /// Timestamp of the most recent probe in milliseconds since the Unix
    /// epoch, if any probe has completed.
    pub checked_at: Option<i64>,
}

/// One health-probe result, as charted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Probe timestamp in milliseconds since the Unix epoch.
    pub ts: i64,
    /// Whether the probe succeeded.
    pub ok: bool,
    /// Round-trip latency in milliseconds; absent for failed probes.
    pub latency_ms: Option<u64>,
}

/// Fleet-level counters for the dashboard stat row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOverview {
    pub services_total: usize,
    pub services_up: usize,
    /// Currently connected realtime clients.
    pub realtime_clients: usize,
}
