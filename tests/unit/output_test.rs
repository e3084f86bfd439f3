//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use todocheck::core::models::{Outcome, TaskRef, TodoError};
use todocheck::output::{CheckReport, FailureReport, OutputMode, format_todo_error};

fn closed() -> TodoError {
    TodoError::issue_closed("src/a.rs", &["// TODO 4: x".to_string()], 12, TaskRef::from("4"))
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn violation_report_fails() {
    let report = CheckReport::new("src/a.rs", 12, Outcome::Violation(closed()));
    assert!(!report.passed);

    let json = report.to_json();
    assert!(json.contains("\"passed\": false"));
    assert!(json.contains("\"outcome\": \"violation\""));
    assert!(json.contains("\"kind\": \"issue_closed\""));
    assert!(json.contains("\"task\": \"4\""));
}

#[test]
fn valid_report_passes() {
    let report = CheckReport::new("src/a.rs", 1, Outcome::Valid);
    assert!(report.passed);
    assert!(report.to_json().contains("\"outcome\": \"valid\""));
}

#[test]
fn human_output_shows_location_and_context() {
    colored::control::set_override(false);
    let text = CheckReport::new("src/a.rs", 12, Outcome::Violation(closed())).to_human();

    assert!(text.starts_with("ERROR: Issue is closed (4)"));
    assert!(text.contains("src/a.rs:12"));
    assert!(text.contains("   12 | // TODO 4: x"));
}

#[test]
fn formatted_error_keeps_body() {
    colored::control::set_override(false);
    assert_eq!(format_todo_error(&closed()), closed().to_string());
}

#[test]
fn failure_report_includes_cause_chain() {
    let err = anyhow::anyhow!("connection reset").context("couldn't fetch task status");
    let report = FailureReport::new(&err, false);
    assert!(!report.passed);
    assert_eq!(report.error, "couldn't fetch task status: connection reset");
}
