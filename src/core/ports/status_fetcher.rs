//! Status fetcher port
//!
//! Defines the interface for resolving a task reference to its status.

use super::super::models::{TaskRef, TaskStatus};

/// Source of task statuses (usually an issue tracker)
///
/// Implementations own every network policy: timeouts, retries and caching
/// all happen here, never in the checker. Implementations must be safe to
/// share between threads.
#[cfg_attr(test, mockall::automock)]
pub trait StatusFetcher: Send + Sync {
    /// Look up the current status of a task
    fn fetch(&self, task: &TaskRef) -> anyhow::Result<TaskStatus>;
}

impl<F: StatusFetcher + ?Sized> StatusFetcher for &F {
    fn fetch(&self, task: &TaskRef) -> anyhow::Result<TaskStatus> {
        (**self).fetch(task)
    }
}

impl<F: StatusFetcher + ?Sized> StatusFetcher for Box<F> {
    fn fetch(&self, task: &TaskRef) -> anyhow::Result<TaskStatus> {
        (**self).fetch(task)
    }
}
