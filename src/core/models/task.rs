//! Task references and statuses
//!
//! A task reference is opaque to the checker: whatever the matcher extracts
//! from a comment is handed to the status fetcher as-is.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of an issue-tracker item (e.g. `123` or `PROJ-42`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRef(String);

impl TaskRef {
    /// Create a new task reference
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the reference as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Lifecycle state of a referenced task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is still open
    Open,
    /// Task has been closed or resolved
    Closed,
    /// Tracker has no task with this reference
    #[serde(alias = "non_existent")]
    NonExistent,
    /// Tracker answered with a state that has no mapping
    Unknown,
}

/// Error returned when a status string is not recognized
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task status: {0}. Use: open, closed, nonexistent, unknown")]
pub struct ParseStatusError(pub String);

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::NonExistent => write!(f, "nonexistent"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "nonexistent" | "non_existent" => Ok(Self::NonExistent),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}
