//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the checker and the
//! systems it consults: comment-syntax matchers and issue trackers.
//!
//! Implementations live in the `matchers` and `adapters` modules.
//!
//! ## Design Principle
//!
//! The checker depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap trackers or comment dialects without touching the checker

mod status_fetcher;
mod todo_matcher;

#[cfg(test)]
pub use status_fetcher::MockStatusFetcher;
pub use status_fetcher::StatusFetcher;
#[cfg(test)]
pub use todo_matcher::MockTodoMatcher;
pub use todo_matcher::{MatchError, TodoMatcher};
