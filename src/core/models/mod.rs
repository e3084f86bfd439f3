//! Domain models for todocheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TaskRef`] - Identifier of an issue-tracker item
//! - [`TaskStatus`] - Lifecycle state of a referenced item
//! - [`CommentContext`] - Where a comment lives, for error reporting
//! - [`TodoError`] - A reportable problem with a TODO comment
//! - [`Outcome`] - Result of checking a single comment

mod comment;
mod outcome;
mod task;
mod todo_error;

pub use comment::CommentContext;
pub use outcome::Outcome;
pub use task::{ParseStatusError, TaskRef, TaskStatus};
pub use todo_error::{TodoError, TodoErrorKind};
