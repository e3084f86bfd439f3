//! Reportable TODO problems
//!
//! A `TodoError` is data, not a Rust error: it describes what is wrong with a
//! comment in enough detail to be rendered on its own.

use serde::Serialize;

use super::TaskRef;

/// What is wrong with a TODO comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoErrorKind {
    /// TODO does not follow the required syntax
    Malformed,
    /// TODO references a closed issue
    IssueClosed,
    /// TODO references an issue that does not exist
    IssueNonExistent,
}

impl TodoErrorKind {
    /// Short human-readable title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Malformed => "Malformed todo",
            Self::IssueClosed => "Issue is closed",
            Self::IssueNonExistent => "Issue doesn't exist",
        }
    }
}

impl std::fmt::Display for TodoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A problem found in a TODO comment, with its location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoError {
    /// What went wrong
    pub kind: TodoErrorKind,
    /// File containing the comment
    pub file: String,
    /// Surrounding source lines
    pub lines: Vec<String>,
    /// 1-based line number of the comment
    pub line: usize,
    /// Referenced task, absent for malformed comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskRef>,
}

impl TodoError {
    /// A TODO whose syntax is invalid
    #[must_use]
    pub fn malformed(file: &str, lines: &[String], line: usize) -> Self {
        Self {
            kind: TodoErrorKind::Malformed,
            file: file.to_string(),
            lines: lines.to_vec(),
            line,
            task: None,
        }
    }

    /// A TODO referencing a closed issue
    #[must_use]
    pub fn issue_closed(file: &str, lines: &[String], line: usize, task: TaskRef) -> Self {
        Self {
            kind: TodoErrorKind::IssueClosed,
            file: file.to_string(),
            lines: lines.to_vec(),
            line,
            task: Some(task),
        }
    }

    /// A TODO referencing a non-existent issue
    #[must_use]
    pub fn issue_non_existent(file: &str, lines: &[String], line: usize, task: TaskRef) -> Self {
        Self {
            kind: TodoErrorKind::IssueNonExistent,
            file: file.to_string(),
            lines: lines.to_vec(),
            line,
            task: Some(task),
        }
    }

    /// Headline for this error, including the task when there is one
    #[must_use]
    pub fn headline(&self) -> String {
        match &self.task {
            Some(task) => format!("ERROR: {} ({task})", self.kind),
            None => format!("ERROR: {}", self.kind),
        }
    }
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.headline())?;
        write!(f, "{}:{}", self.file, self.line)?;
        // Context lines end at the comment line
        let first = self.line.saturating_add(1).saturating_sub(self.lines.len());
        for (offset, text) in self.lines.iter().enumerate() {
            write!(f, "\n{:>5} | {text}", first.saturating_add(offset))?;
        }
        Ok(())
    }
}
