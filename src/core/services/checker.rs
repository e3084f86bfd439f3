//! Check service - validates a single TODO comment
//!
//! The pipeline is: recognize the comment, validate its syntax, extract the
//! issue reference, fetch the issue status, classify. Matching is delegated
//! to a [`TodoMatcher`] and status lookup to a [`StatusFetcher`].

use thiserror::Error;

use crate::core::models::{CommentContext, Outcome, TaskRef, TaskStatus, TodoError};
use crate::core::ports::{MatchError, StatusFetcher, TodoMatcher};

/// Errors that prevent a comment from being classified
///
/// These are distinct from [`Outcome`]: an `Err` means "could not determine",
/// never "determined and broken".
#[derive(Debug, Error)]
pub enum CheckError {
    /// No matcher was supplied for the comment
    #[error("matcher is missing")]
    MissingMatcher,

    /// The status fetcher could not answer
    #[error("couldn't fetch task status for {task}")]
    Fetch {
        /// Reference that was being looked up
        task: TaskRef,
        /// Underlying fetcher failure
        #[source]
        source: anyhow::Error,
    },

    /// Matcher accepted the syntax but then failed to extract a reference
    #[error("matcher contract violated: couldn't extract issue reference from a valid todo {comment:?}")]
    ContractViolation {
        /// The offending comment
        comment: String,
        /// Error the matcher returned
        #[source]
        source: MatchError,
    },
}

impl CheckError {
    /// Whether this error points at a bug in a collaborator rather than
    /// an operational failure
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }
}

/// Validates TODO comments against a status fetcher
///
/// Holds no state besides the fetcher, so one checker can be shared across
/// threads and reused with different matchers.
#[derive(Debug, Clone)]
pub struct Checker<F> {
    fetcher: F,
}

impl<F: StatusFetcher> Checker<F> {
    /// Create a checker backed by the given fetcher
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Get the underlying fetcher
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Check one comment
    ///
    /// # Arguments
    ///
    /// * `matcher` - Matcher for the comment's dialect; `None` is a configuration error
    /// * `comment` - Raw comment text, passed to the matcher untouched
    /// * `file` - File containing the comment
    /// * `lines` - Surrounding lines, carried into any reported error
    /// * `line` - 1-based line number of the comment
    ///
    /// # Returns
    ///
    /// The classified [`Outcome`], or a [`CheckError`] when no
    /// classification could be made.
    pub fn check(
        &self,
        matcher: Option<&dyn TodoMatcher>,
        comment: &str,
        file: &str,
        lines: &[String],
        line: usize,
    ) -> Result<Outcome, CheckError> {
        let matcher = matcher.ok_or(CheckError::MissingMatcher)?;

        if !matcher.is_match(comment) {
            return Ok(Outcome::NotApplicable);
        }

        if !matcher.is_valid(comment) {
            log::debug!("{file}:{line}: malformed todo");
            return Ok(Outcome::Violation(TodoError::malformed(file, lines, line)));
        }

        let task = matcher.extract_issue_ref(comment).map_err(|source| {
            log::error!("{file}:{line}: matcher accepted {comment:?} but extraction failed: {source}");
            CheckError::ContractViolation {
                comment: comment.to_string(),
                source,
            }
        })?;

        log::debug!("{file}:{line}: fetching status of {task}");
        let status = match self.fetcher.fetch(&task) {
            Ok(status) => status,
            Err(source) => return Err(CheckError::Fetch { task, source }),
        };

        let outcome = match status {
            TaskStatus::Closed => Outcome::Violation(TodoError::issue_closed(file, lines, line, task)),
            TaskStatus::NonExistent => {
                Outcome::Violation(TodoError::issue_non_existent(file, lines, line, task))
            },
            TaskStatus::Open | TaskStatus::Unknown => Outcome::Valid,
        };

        Ok(outcome)
    }

    /// Check one comment described by a [`CommentContext`]
    pub fn check_context(
        &self,
        matcher: Option<&dyn TodoMatcher>,
        ctx: &CommentContext,
    ) -> Result<Outcome, CheckError> {
        self.check(matcher, &ctx.comment, &ctx.file, &ctx.lines, ctx.line)
    }
}
