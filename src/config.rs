//! Project configuration
//!
//! Settings live in a `.todocheck.toml` file, found by walking up from the
//! working directory until a repository root (`.git`) is reached.
//!
//! ```toml
//! [tracker]
//! kind = "github"
//! origin = "github.com/acme/widgets"
//! token_env = "GITHUB_TOKEN"
//!
//! [todos]
//! keywords = ["TODO", "FIXME"]
//! format = "numeric"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::fetcher::StaticFetcher;
use crate::core::models::TaskStatus;
use crate::core::ports::StatusFetcher;
use crate::matchers::MatcherSettings;

/// Configuration filename
pub const CONFIG_FILE: &str = ".todocheck.toml";

/// Errors raised while loading configuration or building from it
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that failed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Tracker requires an origin but none was configured
    #[error("tracker `{0}` requires `origin` to be set")]
    MissingOrigin(TrackerKind),

    /// Tracker support was not compiled in
    #[error("tracker `{0}` is not supported by this build")]
    Unsupported(TrackerKind),

    /// Tracker client could not be constructed
    #[error("failed to set up tracker: {0}")]
    Tracker(#[source] anyhow::Error),
}

/// Which issue tracker to consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerKind {
    /// Statuses listed in `[tracker.statuses]`
    #[default]
    Static,
    /// GitHub issues
    Github,
}

impl std::fmt::Display for TrackerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Github => write!(f, "github"),
        }
    }
}

/// `[tracker]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Tracker kind
    pub kind: TrackerKind,
    /// Repository or project the tracker serves (e.g. `github.com/acme/widgets`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Override for the tracker's API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Environment variable holding an API token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
    /// Known statuses, used by the static tracker
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub statuses: BTreeMap<String, TaskStatus>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Issue tracker settings
    #[serde(default)]
    pub tracker: TrackerConfig,
    /// TODO syntax settings
    #[serde(default)]
    pub todos: MatcherSettings,
}

impl Config {
    /// Find the nearest config file from `from` up to the repository root
    #[must_use]
    pub fn find(from: &Path) -> Option<PathBuf> {
        let mut current = from.to_path_buf();

        // Normalize: if it's a file, start from parent
        if current.is_file() {
            current = current.parent().unwrap_or(from).to_path_buf();
        }

        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            // Stop at repo root (.git) or filesystem root
            if current.join(".git").exists() {
                return None;
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the nearest config file, or defaults if there is none
    pub fn discover(from: &Path) -> Result<Self, ConfigError> {
        match Self::find(from) {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                Self::load(&path)
            },
            None => {
                log::debug!("no {CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Build the status fetcher this config describes
    pub fn build_fetcher(&self) -> Result<Box<dyn StatusFetcher>, ConfigError> {
        match self.tracker.kind {
            TrackerKind::Static => Ok(Box::new(StaticFetcher::with_statuses(
                self.tracker.statuses.iter().map(|(k, v)| (k.as_str(), *v)),
            ))),
            TrackerKind::Github => self.build_github_fetcher(),
        }
    }

    /// Read the API token from the configured environment variable
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let var = self.tracker.token_env.as_deref()?;
        std::env::var(var).ok().filter(|t| !t.is_empty())
    }

    #[cfg(feature = "github")]
    fn build_github_fetcher(&self) -> Result<Box<dyn StatusFetcher>, ConfigError> {
        use crate::adapters::fetcher::{CachingFetcher, GithubFetcher};

        let origin = self
            .tracker
            .origin
            .as_deref()
            .ok_or(ConfigError::MissingOrigin(TrackerKind::Github))?;
        let fetcher = GithubFetcher::new(origin, self.tracker.api_url.as_deref(), self.token())
            .map_err(ConfigError::Tracker)?;
        Ok(Box::new(CachingFetcher::new(fetcher)))
    }

    #[cfg(not(feature = "github"))]
    fn build_github_fetcher(&self) -> Result<Box<dyn StatusFetcher>, ConfigError> {
        if self.tracker.origin.is_none() {
            return Err(ConfigError::MissingOrigin(TrackerKind::Github));
        }
        Err(ConfigError::Unsupported(TrackerKind::Github))
    }
}
