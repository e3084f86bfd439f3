//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Outcome, TodoError};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking one comment
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the comment passed (no violation)
    pub passed: bool,
    /// File the comment was found in
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// Classified outcome
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl CheckReport {
    /// Build a report for an outcome
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, outcome: Outcome) -> Self {
        Self {
            passed: !outcome.is_violation(),
            file: file.into(),
            line,
            outcome,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        match &self.outcome {
            Outcome::NotApplicable => format!("{}:{}: not a todo comment", self.file, self.line),
            Outcome::Valid => format!("{}:{}: {}", self.file, self.line, "ok".green()),
            Outcome::Violation(err) => format_todo_error(err),
        }
    }

    /// Pretty-printed JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Format a TODO error with a colored headline
#[must_use]
pub fn format_todo_error(err: &TodoError) -> String {
    let rendered = err.to_string();
    let headline = err.headline();
    rendered
        .strip_prefix(&headline)
        .map_or_else(|| rendered.clone(), |rest| format!("{}{rest}", headline.red().bold()))
}

/// Error that stopped a check, rendered for the chosen mode
#[derive(Debug, Serialize)]
pub struct FailureReport {
    /// Always false
    pub passed: bool,
    /// Error message including its causes
    pub error: String,
    /// Whether the failure is a bug in a collaborator
    pub internal: bool,
}

impl FailureReport {
    /// Build a failure report
    #[must_use]
    pub fn new(error: &anyhow::Error, internal: bool) -> Self {
        Self {
            passed: false,
            error: format!("{error:#}"),
            internal,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let label = if self.internal { "internal error" } else { "error" };
                eprintln!("{}: {}", label.red().bold(), self.error);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
