//! Check a single comment

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;

use todocheck::config::Config;
use todocheck::core::ports::TodoMatcher;
use todocheck::core::services::Checker;
use todocheck::matchers::{StandardMatcher, matcher_for_path};
use todocheck::output::{CheckReport, OutputMode};

/// Arguments of the `check` command
#[derive(Debug)]
pub struct CheckArgs {
    /// File the comment belongs to
    pub file: PathBuf,
    /// 1-based line number of the comment
    pub line: usize,
    /// Raw comment text
    pub comment: String,
    /// Number of source lines to show
    pub context_lines: usize,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

/// Validate one comment; exits with 1 when a violation is found
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&search_root(&args.file)?)?,
    };

    let matcher = matcher_for_path(&args.file, &config.todos)
        .context("failed to compile TODO matcher")?;
    if matcher.is_none() {
        log::warn!("unrecognized file type: {}", args.file.display());
    }

    let checker = Checker::new(config.build_fetcher()?);
    let file = args.file.display().to_string();
    let lines = context_lines(&args.file, args.line, args.context_lines, &args.comment);

    let outcome = checker
        .check(matcher.as_ref().map(as_todo_matcher), &args.comment, &file, &lines, args.line)
        .with_context(|| format!("couldn't check {file}:{}", args.line))?;

    let report = CheckReport::new(file, args.line, outcome);
    report.render(mode);

    Ok(if report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

const fn as_todo_matcher(matcher: &StandardMatcher) -> &dyn TodoMatcher {
    matcher
}

/// Directory to start the config search from
fn search_root(file: &Path) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| cwd.clone(), |p| cwd.join(p));
    Ok(if dir.is_dir() { dir } else { cwd })
}

/// Read up to `count` lines ending at `line`, falling back to the comment
/// itself when the file can't be read
fn context_lines(file: &Path, line: usize, count: usize, comment: &str) -> Vec<String> {
    let Ok(content) = fs::read_to_string(file) else {
        return vec![comment.to_string()];
    };

    let all: Vec<&str> = content.lines().collect();
    if line == 0 || line > all.len() {
        return vec![comment.to_string()];
    }

    let start = line.saturating_sub(count.max(1));
    all[start..line].iter().map(|l| (*l).to_string()).collect()
}
