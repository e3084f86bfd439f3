//! Concrete TODO matchers
//!
//! - [`dialect`] - Comment syntaxes and the file-extension dispatch table
//! - [`standard`] - Regex-based [`TodoMatcher`](crate::core::ports::TodoMatcher)
//!   for any dialect and issue format

pub mod dialect;
pub mod standard;

use std::path::Path;

pub use dialect::Dialect;
pub use standard::{IssueFormat, MatcherSettings, StandardMatcher};

/// Build the matcher for a source file, based on its comment dialect
///
/// Returns `Ok(None)` when the file type is not recognized.
pub fn matcher_for_path(
    path: &Path,
    settings: &MatcherSettings,
) -> Result<Option<StandardMatcher>, regex::Error> {
    let Some(dialect) = Dialect::for_path(path) else {
        log::debug!("no comment dialect for {}", path.display());
        return Ok(None);
    };
    StandardMatcher::new(dialect, settings).map(Some)
}
