//! Comment context
//!
//! Everything the caller knows about where a comment came from. The checker
//! only reads it.

/// A single comment and its location in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContext {
    /// File the comment was found in
    pub file: String,
    /// Surrounding source lines, shown when reporting
    pub lines: Vec<String>,
    /// 1-based line number of the comment
    pub line: usize,
    /// Raw comment text, exactly as it appears in source
    pub comment: String,
}

impl CommentContext {
    /// Create a new comment context
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        lines: Vec<String>,
        line: usize,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            lines,
            line,
            comment: comment.into(),
        }
    }
}
