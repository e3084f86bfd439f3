//! Result of checking a single comment

use serde::Serialize;

use super::TodoError;

/// Classified result of checking one comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "error", rename_all = "snake_case")]
pub enum Outcome {
    /// Comment is not a TODO, nothing to check
    NotApplicable,
    /// TODO is well-formed and its issue is not closed or missing
    Valid,
    /// TODO has a reportable problem
    Violation(TodoError),
}

impl Outcome {
    /// Whether this outcome should be reported
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }

    /// Borrow the violation, if any
    #[must_use]
    pub const fn violation(&self) -> Option<&TodoError> {
        match self {
            Self::Violation(err) => Some(err),
            Self::NotApplicable | Self::Valid => None,
        }
    }

    /// Take the violation, if any
    #[must_use]
    pub fn into_violation(self) -> Option<TodoError> {
        match self {
            Self::Violation(err) => Some(err),
            Self::NotApplicable | Self::Valid => None,
        }
    }
}
