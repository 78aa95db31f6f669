//! Integration tests for dependency injection.
//!
//! These tests exercise the app container with canned sources:
//! - Fetch failures abort the run
//! - The source is called exactly once per report
//! - The HTTP adapter and the container work together

mod common;

use chrono::NaiveDate;
use eppo_report::{
    Error,
    adapters::InMemorySource,
    app::{ApiSettings, App, ReportConfig},
    pipeline::ReportKind,
};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_transport_failure_aborts_run() {
    let dir = tempdir().unwrap();
    let app = App::for_testing()
        .with_source(InMemorySource::transport_failure("connection refused"))
        .build();

    let config = ReportConfig::new(ReportKind::Status).with_output_dir(dir.path());
    let result = app.run_report(&config);

    assert!(matches!(result, Err(Error::Transport { .. })));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_api_failure_carries_status_and_body() {
    let app = App::for_testing()
        .with_source(InMemorySource::api_failure(403, "{\"message\":\"forbidden\"}"))
        .build();

    let err = app
        .run_report(&ReportConfig::new(ReportKind::Status))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("403"));
    assert!(message.contains("forbidden"));
}

#[test]
fn test_source_is_fetched_once_per_report() {
    let source = InMemorySource::new(json!([]));
    let app = App::for_testing().with_source(source.clone()).build();

    app.run_report(&ReportConfig::new(ReportKind::Status)).unwrap();

    assert_eq!(source.fetch_count(), 1);
}

#[test]
fn test_app_against_local_http_server() {
    let (base_url, server) = common::serve_once(
        r#"[{"id":"exp_9","name":"Pricing","status":"wrap_up","owner":"kim@x.com"}]"#,
    );

    let settings = ApiSettings::from_lookup(|name| match name {
        "EPPO_API_KEY" => Some("test-key".to_string()),
        "EPPO_BASE_URL" => Some(format!("{base_url}/")),
        _ => None,
    })
    .unwrap();
    let dir = tempdir().unwrap();
    let config = ReportConfig::new(ReportKind::Status).with_output_dir(dir.path());

    let run = App::new(&settings).run_report(&config).unwrap();
    server.join().unwrap();

    assert_eq!(run.summary().total, 1);
    let written = run.written_path().unwrap();
    assert!(
        written
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("eppo_ready_wrap_up_experiments_")
    );
    let contents = std::fs::read_to_string(written).unwrap();
    assert!(contents.contains("kim,kim@x.com,Pricing,exp_9,wrap_up,https://eppo.cloud/experiments/exp_9"));
}

#[test]
fn test_report_date_is_injectable() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    let app = App::for_testing().with_report_date(date).build();
    assert_eq!(app.report_date(), date);
}
