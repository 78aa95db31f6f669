//! End-to-end tests of the report pipeline against in-memory payloads.

mod common;

use std::fs;

use chrono::NaiveDate;
use eppo_report::{
    adapters::InMemorySource,
    app::{App, OutputStatus, ReportConfig},
    pipeline::{ReportKind, TeamId},
};
use serde_json::json;
use tempfile::tempdir;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn app_with(payload: serde_json::Value) -> App {
    App::for_testing()
        .with_source(InMemorySource::new(payload))
        .with_report_date(report_date())
        .build()
}

#[test]
fn test_team_report_end_to_end() {
    let dir = tempdir().unwrap();
    let app = app_with(common::twenty_five_experiments());
    let config =
        ReportConfig::new(ReportKind::Team(TeamId::new(common::TEAM))).with_output_dir(dir.path());

    let run = app.run_report(&config).unwrap();

    let path = dir
        .path()
        .join("eppo_experiments_team_123_2024-06-15.csv");
    assert_eq!(run.written_path(), Some(path.as_path()));

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "experiment_name,experiment_id,owner.name,owner.email,experiment_url",
            "\"Checkout, redesigned\",exp_123_a,Jane Smith,jane@x.com,https://eppo.cloud/experiments/exp_123_a",
            "\"Say \"\"hi\"\" banner\",456,jane,jane@x.com,https://eppo.cloud/experiments/456",
            "Unnamed Experiment,exp_123_c,Bob,,https://eppo.cloud/experiments/exp_123_c",
        ]
    );

    let summary = run.summary();
    assert_eq!(run.report.fetched, Some(25));
    assert_eq!(summary.total, 3);
    assert_eq!(summary.unique_owner_emails, 1);
}

#[test]
fn test_status_report_end_to_end() {
    let dir = tempdir().unwrap();
    let app = app_with(common::twenty_five_experiments());
    let config = ReportConfig::new(ReportKind::Status).with_output_dir(dir.path());

    let run = app.run_report(&config).unwrap();

    let path = dir
        .path()
        .join("eppo_ready_wrap_up_experiments_2024-06-15.csv");
    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    // 11 odd-indexed "ready" fillers plus the READY and wrap_up team records.
    assert_eq!(lines.len(), 1 + 13);
    assert_eq!(
        lines[0],
        "owner,owner_email,experiment_name,experiment_id,experiment_status,experiment_link"
    );
    assert!(lines.contains(
        &"Jane Smith,jane@x.com,\"Checkout, redesigned\",exp_123_a,READY,https://eppo.cloud/experiments/exp_123_a"
    ));
    assert!(!contents.contains("draft"));

    let summary = run.summary();
    assert_eq!(summary.total, 13);
    assert_eq!(summary.unique_owner_emails, 12);
    assert_eq!(summary.status_counts.get("ready"), Some(&12));
    assert_eq!(summary.status_counts.get("wrap_up"), Some(&1));
}

#[test]
fn test_object_payload_writes_nothing() {
    let dir = tempdir().unwrap();
    let app = app_with(json!({"experiments": [{"team_id": 123}]}));
    let config =
        ReportConfig::new(ReportKind::Team(TeamId::new("123"))).with_output_dir(dir.path());

    let run = app.run_report(&config).unwrap();

    assert!(run.report.is_empty());
    assert_eq!(run.report.fetched, None);
    assert!(matches!(run.output, OutputStatus::NoMatches));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_no_matches_writes_nothing() {
    let dir = tempdir().unwrap();
    let app = app_with(common::twenty_five_experiments());
    let config =
        ReportConfig::new(ReportKind::Team(TeamId::new("999"))).with_output_dir(dir.path());

    let run = app.run_report(&config).unwrap();

    assert!(matches!(run.output, OutputStatus::NoMatches));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_non_numeric_team_matches_nothing() {
    // Known edge case: textual team ids never match, even themselves.
    let dir = tempdir().unwrap();
    let app = app_with(json!([{"id": "e1", "team_id": "growth"}]));
    let config =
        ReportConfig::new(ReportKind::Team(TeamId::new("growth"))).with_output_dir(dir.path());

    let run = app.run_report(&config).unwrap();

    assert!(run.report.is_empty());
}

#[test]
fn test_same_day_rerun_overwrites_report() {
    let dir = tempdir().unwrap();
    let config = ReportConfig::new(ReportKind::Status).with_output_dir(dir.path());

    app_with(json!([{"id": "old", "status": "ready"}]))
        .run_report(&config)
        .unwrap();
    let run = app_with(json!([{"id": "new", "status": "ready"}]))
        .run_report(&config)
        .unwrap();

    let contents = fs::read_to_string(run.written_path().unwrap()).unwrap();
    assert!(contents.contains(",new,"));
    assert!(!contents.contains(",old,"));
}
