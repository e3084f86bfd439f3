//! Regex-based TODO matcher
//!
//! A well-formed TODO looks like `<marker> <KEYWORD> <ref>[:] [text]`, for
//! example `// TODO #12: drop this shim` or `# FIXME PROJ-7 flaky`.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Dialect;
use crate::core::models::TaskRef;
use crate::core::ports::{MatchError, TodoMatcher};

/// Keyword recognized when none are configured
pub const DEFAULT_KEYWORD: &str = "TODO";

/// Shape of the issue references a tracker uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueFormat {
    /// Plain issue numbers, optionally prefixed with `#` (GitHub, GitLab, Redmine)
    #[default]
    Numeric,
    /// Project key and number, `PROJ-123` (Jira, YouTrack)
    Keyed,
}

impl IssueFormat {
    /// Regex fragment matching a reference, capturing the issue ID as `issue`
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Numeric => r"#?(?P<issue>[0-9]+)",
            Self::Keyed => r"(?P<issue>[A-Z][A-Z0-9_]*-[0-9]+)",
        }
    }
}

/// User-tunable matcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    /// Keywords that mark a TODO comment (e.g. `TODO`, `FIXME`)
    pub keywords: Vec<String>,
    /// Issue reference format of the configured tracker
    pub format: IssueFormat,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            keywords: vec![DEFAULT_KEYWORD.to_string()],
            format: IssueFormat::default(),
        }
    }
}

/// TODO matcher for one comment dialect and issue format
#[derive(Debug, Clone)]
pub struct StandardMatcher {
    dialect: Dialect,
    todo: Regex,
    valid: Regex,
}

impl StandardMatcher {
    /// Compile a matcher for the given dialect
    pub fn new(dialect: Dialect, settings: &MatcherSettings) -> Result<Self, regex::Error> {
        let keywords = if settings.keywords.is_empty() {
            regex::escape(DEFAULT_KEYWORD)
        } else {
            settings.keywords.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|")
        };
        let head = format!(r"^\s*(?:{})\s*(?:{keywords})", dialect.marker_pattern());

        let todo = Regex::new(&format!(r"{head}\b"))?;
        let valid = Regex::new(&format!(
            r"{head}(?:[ \t]*:[ \t]*|[ \t]+){}(?:$|[\s:*])",
            settings.format.pattern()
        ))?;

        Ok(Self { dialect, todo, valid })
    }

    /// Dialect this matcher was built for
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl TodoMatcher for StandardMatcher {
    fn is_match(&self, comment: &str) -> bool {
        self.todo.is_match(comment)
    }

    fn is_valid(&self, comment: &str) -> bool {
        self.valid.is_match(comment)
    }

    fn extract_issue_ref(&self, comment: &str) -> Result<TaskRef, MatchError> {
        self.valid
            .captures(comment)
            .and_then(|caps| caps.name("issue"))
            .map(|m| TaskRef::from(m.as_str()))
            .ok_or_else(|| MatchError::NoReference(comment.to_string()))
    }
}
