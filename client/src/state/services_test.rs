use super::*;
use crate::net::types::ServiceStatus;

fn summary(name: &str) -> ServiceSummary {
    ServiceSummary {
        name: name.to_owned(),
        url: format!("http://{name}.internal/healthz"),
        status: ServiceStatus::Up,
        latency_ms: Some(12),
        uptime_pct: 100.0,
        checked_at: Some(1_700_000_000_000),
    }
}

#[test]
fn set_items_selects_first_service_by_default() {
    let mut state = ServicesState::default();
    state.set_items(vec![summary("api"), summary("db")]);
    assert_eq!(state.selected.as_deref(), Some("api"));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn set_items_keeps_existing_selection_when_still_present() {
    let mut state = ServicesState::default();
    state.set_items(vec![summary("api"), summary("db")]);
    state.selected = Some("db".to_owned());
    state.history = vec![SamplePoint { ts: 1, ok: true, latency_ms: Some(5) }];

    state.set_items(vec![summary("db")]);
    assert_eq!(state.selected.as_deref(), Some("db"));
    assert!(!state.history.is_empty());
}

#[test]
fn set_items_resets_selection_when_service_disappears() {
    let mut state = ServicesState::default();
    state.selected = Some("gone".to_owned());
    state.history = vec![SamplePoint { ts: 1, ok: true, latency_ms: Some(5) }];

    state.set_items(vec![summary("api")]);
    assert_eq!(state.selected.as_deref(), Some("api"));
    assert!(state.history.is_empty());
}

#[test]
fn set_items_with_empty_list_clears_selection() {
    let mut state = ServicesState::default();
    state.selected = Some("api".to_owned());
    state.set_items(Vec::new());
    assert!(state.selected.is_none());
}
