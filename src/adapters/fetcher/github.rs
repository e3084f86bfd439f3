//! GitHub issues fetcher
//!
//! Looks up `GET {api}/repos/{owner}/{repo}/issues/{number}`. A 404 means the
//! issue does not exist; any other non-success status is an error.

use anyhow::{Context, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::core::models::{TaskRef, TaskStatus};
use crate::core::ports::StatusFetcher;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct IssueResponse {
    state: String,
}

/// Fetcher backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubFetcher {
    client: Client,
    api_url: String,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GithubFetcher {
    /// Create a fetcher for a repository origin
    ///
    /// `origin` may be `owner/repo`, `github.com/owner/repo` or a full
    /// `https://` URL, with or without a trailing `.git`.
    pub fn new(origin: &str, api_url: Option<&str>, token: Option<String>) -> anyhow::Result<Self> {
        let (owner, repo) = parse_origin(origin)?;
        let client = Client::builder()
            .user_agent(concat!("todocheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.unwrap_or(DEFAULT_API_URL).trim_end_matches('/').to_string(),
            owner,
            repo,
            token,
        })
    }
}

impl StatusFetcher for GithubFetcher {
    fn fetch(&self, task: &TaskRef) -> anyhow::Result<TaskStatus> {
        let number: u64 = task
            .as_str()
            .parse()
            .with_context(|| format!("GitHub issue references must be numeric, got {task}"))?;
        let url = format!("{}/repos/{}/{}/issues/{number}", self.api_url, self.owner, self.repo);
        log::debug!("GET {url}");

        let mut request = self.client.get(&url).header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().with_context(|| format!("request to {url} failed"))?;
        match response.status() {
            StatusCode::NOT_FOUND => return Ok(TaskStatus::NonExistent),
            status if !status.is_success() => bail!("GitHub returned {status} for issue {task}"),
            _ => {},
        }

        let issue: IssueResponse = response.json().context("failed to parse GitHub issue response")?;
        Ok(match issue.state.as_str() {
            "open" => TaskStatus::Open,
            "closed" => TaskStatus::Closed,
            _ => TaskStatus::Unknown,
        })
    }
}

/// Split an origin into `(owner, repo)`
fn parse_origin(origin: &str) -> anyhow::Result<(String, String)> {
    let trimmed = origin
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("github.com/")
        .trim_end_matches('/')
        .trim_end_matches(".git");

    match trimmed.split('/').collect::<Vec<_>>().as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok(((*owner).to_string(), (*repo).to_string()))
        },
        _ => bail!("invalid GitHub origin {origin:?}, expected owner/repo"),
    }
}
