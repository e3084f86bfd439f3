//! Caching status fetcher
//!
//! The checker never caches, so a run over many comments referencing the
//! same issue would hit the tracker once per comment. Wrapping the real
//! fetcher in a [`CachingFetcher`] collapses those into one lookup.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::core::models::{TaskRef, TaskStatus};
use crate::core::ports::StatusFetcher;

/// Memoizes successful lookups of an inner fetcher
///
/// Failed lookups are not cached, so a transient error is retried the next
/// time the same reference comes up.
#[derive(Debug)]
pub struct CachingFetcher<F> {
    inner: F,
    cache: Mutex<HashMap<TaskRef, TaskStatus>>,
}

impl<F: StatusFetcher> CachingFetcher<F> {
    /// Wrap a fetcher
    #[must_use]
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached statuses
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache().len()
    }

    /// Whether nothing has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are plain values, so a panic while the lock was held cannot
    // leave the map half-updated.
    fn cache(&self) -> MutexGuard<'_, HashMap<TaskRef, TaskStatus>> {
        self.cache.lock().unwrap_or_else(|poisoned| {
            log::warn!("status cache lock was poisoned, reusing its contents");
            poisoned.into_inner()
        })
    }
}

impl<F: StatusFetcher> StatusFetcher for CachingFetcher<F> {
    fn fetch(&self, task: &TaskRef) -> anyhow::Result<TaskStatus> {
        let cached = self.cache().get(task).copied();
        if let Some(status) = cached {
            log::trace!("cache hit for {task}");
            return Ok(status);
        }

        // Lock is not held across the inner lookup; concurrent misses on the
        // same reference may both reach the tracker.
        let status = self.inner.fetch(task)?;
        self.cache().insert(task.clone(), status);
        Ok(status)
    }
}
