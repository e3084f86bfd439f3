//! TODO matcher port
//!
//! Defines the interface for recognizing and parsing TODO comments in a
//! particular comment dialect.

use thiserror::Error;

use super::super::models::TaskRef;

/// Errors a matcher can report while extracting a reference
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// No issue reference was found in the comment
    #[error("no issue reference in comment: {0}")]
    NoReference(String),
}

/// Recognizes TODO comments and extracts the issue they reference
///
/// Implementations must uphold one contract: whenever `is_valid` returns
/// `true` for a comment, `extract_issue_ref` must succeed on it.
#[cfg_attr(test, mockall::automock)]
pub trait TodoMatcher: Send + Sync {
    /// Whether the comment is meant as a TODO annotation at all
    fn is_match(&self, comment: &str) -> bool;

    /// Whether a recognized TODO is well-formed
    fn is_valid(&self, comment: &str) -> bool;

    /// Extract the issue reference from a well-formed TODO
    fn extract_issue_ref(&self, comment: &str) -> Result<TaskRef, MatchError>;
}
