use super::*;
use crate::state::ServiceHealth;
use crate::state::test_helpers::dummy_target;

fn ok_sample(ts: i64, latency_ms: u64) -> Sample {
    Sample { ts, ok: true, latency_ms: Some(latency_ms) }
}

fn failed_sample(ts: i64) -> Sample {
    Sample { ts, ok: false, latency_ms: None }
}

// =============================================================================
// parse_inline_targets
// =============================================================================

#[test]
fn parse_inline_targets_basic() {
    let targets = parse_inline_targets("api=http://api.internal/healthz,db=http://db.internal/ping");
    assert_eq!(
        targets,
        vec![
            MonitorTarget { name: "api".into(), url: "http://api.internal/healthz".into() },
            MonitorTarget { name: "db".into(), url: "http://db.internal/ping".into() },
        ]
    );
}

#[test]
fn parse_inline_targets_trims_whitespace() {
    let targets = parse_inline_targets(" api = http://a/ , db = http://b/ ");
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].name, "api");
    assert_eq!(targets[0].url, "http://a/");
}

#[test]
fn parse_inline_targets_skips_malformed_entries() {
    let targets = parse_inline_targets("api=http://a/,nourl,=http://b/,db=");
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name, "api");
}

#[test]
fn parse_inline_targets_keeps_equals_in_urls() {
    let targets = parse_inline_targets("api=http://a/health?probe=deep");
    assert_eq!(targets[0].url, "http://a/health?probe=deep");
}

#[test]
fn parse_inline_targets_empty_input() {
    assert!(parse_inline_targets("").is_empty());
}

// =============================================================================
// parse_config_file
// =============================================================================

#[test]
fn parse_config_file_yaml() {
    let raw = r"
services:
  - name: api
    url: http://api.internal/healthz
  - name: db
    url: http://db.internal/ping
";
    let targets = parse_config_file(raw).unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[1].name, "db");
}

#[test]
fn parse_config_file_rejects_malformed_yaml() {
    assert!(parse_config_file("services: [whoops").is_err());
}

#[test]
fn parse_config_file_rejects_missing_fields() {
    assert!(parse_config_file("services:\n  - name: api\n").is_err());
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_unknown_before_first_probe() {
    assert_eq!(classify(None, 1000), ServiceStatus::Unknown);
}

#[test]
fn classify_down_after_failed_probe() {
    assert_eq!(classify(Some(&failed_sample(1)), 1000), ServiceStatus::Down);
}

#[test]
fn classify_up_for_fast_probe() {
    assert_eq!(classify(Some(&ok_sample(1, 20)), 1000), ServiceStatus::Up);
}

#[test]
fn classify_degraded_above_threshold() {
    assert_eq!(classify(Some(&ok_sample(1, 1001)), 1000), ServiceStatus::Degraded);
}

#[test]
fn classify_threshold_is_exclusive() {
    assert_eq!(classify(Some(&ok_sample(1, 1000)), 1000), ServiceStatus::Up);
}

// =============================================================================
// uptime_pct
// =============================================================================

#[test]
fn uptime_pct_empty_window_is_fully_up() {
    let samples = VecDeque::new();
    assert!((uptime_pct(&samples) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn uptime_pct_counts_failures() {
    let samples: VecDeque<Sample> =
        vec![ok_sample(1, 10), failed_sample(2), ok_sample(3, 10), ok_sample(4, 10)].into();
    assert!((uptime_pct(&samples) - 75.0).abs() < f64::EPSILON);
}

#[test]
fn uptime_pct_all_failed() {
    let samples: VecDeque<Sample> = vec![failed_sample(1), failed_sample(2)].into();
    assert!(uptime_pct(&samples).abs() < f64::EPSILON);
}

// =============================================================================
// summarize
// =============================================================================

#[test]
fn summarize_empty_service() {
    let health = ServiceHealth::new(dummy_target("api"));
    let summary = summarize(&health, 1000);
    assert_eq!(summary.name, "api");
    assert_eq!(summary.status, ServiceStatus::Unknown);
    assert_eq!(summary.latency_ms, None);
    assert_eq!(summary.checked_at, None);
    assert!((summary.uptime_pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn summarize_reports_latest_probe() {
    let mut health = ServiceHealth::new(dummy_target("api"));
    health.record(ok_sample(100, 12));
    health.record(ok_sample(200, 34));

    let summary = summarize(&health, 1000);
    assert_eq!(summary.status, ServiceStatus::Up);
    assert_eq!(summary.latency_ms, Some(34));
    assert_eq!(summary.checked_at, Some(200));
}

#[test]
fn summarize_after_failure_has_no_latency() {
    let mut health = ServiceHealth::new(dummy_target("api"));
    health.record(ok_sample(100, 12));
    health.record(failed_sample(200));

    let summary = summarize(&health, 1000);
    assert_eq!(summary.status, ServiceStatus::Down);
    assert_eq!(summary.latency_ms, None);
    assert_eq!(summary.checked_at, Some(200));
    assert!((summary.uptime_pct - 50.0).abs() < f64::EPSILON);
}

#[test]
fn service_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ServiceStatus::Degraded).unwrap(), "\"degraded\"");
    assert_eq!(serde_json::to_string(&ServiceStatus::Unknown).unwrap(), "\"unknown\"");
}
