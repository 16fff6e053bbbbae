//! Service-health API feeding the dashboard.
//!
//! DESIGN
//! ======
//! Handlers are thin shells over `collect_*` functions that read the
//! shared health store, so the store-to-payload logic is testable without
//! HTTP plumbing.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::auth::AuthUser;
use crate::services::monitor::{self, ServiceStatus, ServiceSummary};
use crate::state::{AppState, Sample};

/// Fleet counters for the dashboard stat row.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusOverview {
    pub services_total: usize,
    /// Services currently reachable (up or degraded).
    pub services_up: usize,
    pub realtime_clients: usize,
}

pub(crate) async fn collect_summaries(state: &AppState) -> Vec<ServiceSummary> {
    let health = state.health.read().await;
    health
        .iter()
        .map(|h| monitor::summarize(h, state.monitor.degraded_ms))
        .collect()
}

pub(crate) async fn collect_history(state: &AppState, name: &str) -> Option<Vec<Sample>> {
    let health = state.health.read().await;
    let entry = health.iter().find(|h| h.target.name == name)?;
    Some(entry.samples.iter().copied().collect())
}

pub(crate) async fn collect_overview(state: &AppState) -> StatusOverview {
    let health = state.health.read().await;
    let services_total = health.len();
    let services_up = health
        .iter()
        .filter(|h| {
            matches!(
                monitor::classify(h.latest(), state.monitor.degraded_ms),
                ServiceStatus::Up | ServiceStatus::Degraded
            )
        })
        .count();
    drop(health);

    let realtime_clients = state.realtime.connected().await;
    StatusOverview { services_total, services_up, realtime_clients }
}

/// `GET /api/services`: current summaries, in configured order.
pub async fn list_services(State(state): State<AppState>, _auth: AuthUser) -> Json<Vec<ServiceSummary>> {
    Json(collect_summaries(&state).await)
}

/// `GET /api/services/{name}/history`: retained samples for one service.
pub async fn service_history(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(name): Path<String>,
) -> Result<Json<Vec<Sample>>, ApiError> {
    collect_history(&state, &name)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("service {name}")))
}

/// `GET /api/status`: fleet counters.
pub async fn overview(State(state): State<AppState>, _auth: AuthUser) -> Json<StatusOverview> {
    Json(collect_overview(&state).await)
}

#[cfg(test)]
#[path = "services_test.rs"]
mod tests;
