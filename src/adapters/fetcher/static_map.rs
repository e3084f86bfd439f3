//! In-memory status fetcher
//!
//! Answers from a fixed table. Useful for offline runs and for trackers whose
//! state is exported to the config file.

use std::collections::HashMap;

use crate::core::models::{TaskRef, TaskStatus};
use crate::core::ports::StatusFetcher;

/// Fetcher backed by a fixed table of statuses
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    statuses: HashMap<TaskRef, TaskStatus>,
    fallback: TaskStatus,
}

impl StaticFetcher {
    /// Create an empty fetcher; every lookup answers `NonExistent`
    #[must_use]
    pub fn new() -> Self {
        Self {
            statuses: HashMap::new(),
            fallback: TaskStatus::NonExistent,
        }
    }

    /// Create a fetcher from `(reference, status)` pairs
    #[must_use]
    pub fn with_statuses<I, K>(statuses: I) -> Self
    where
        I: IntoIterator<Item = (K, TaskStatus)>,
        K: Into<TaskRef>,
    {
        Self {
            statuses: statuses.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            fallback: TaskStatus::NonExistent,
        }
    }

    /// Set the status reported for references missing from the table
    #[must_use]
    pub const fn with_fallback(mut self, fallback: TaskStatus) -> Self {
        self.fallback = fallback;
        self
    }

    /// Record the status of a task
    pub fn insert(&mut self, task: impl Into<TaskRef>, status: TaskStatus) {
        self.statuses.insert(task.into(), status);
    }
}

impl Default for StaticFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFetcher for StaticFetcher {
    fn fetch(&self, task: &TaskRef) -> anyhow::Result<TaskStatus> {
        Ok(self.statuses.get(task).copied().unwrap_or(self.fallback))
    }
}
