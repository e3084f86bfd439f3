//! Tests for the checker pipeline
//!
//! Collaborators are hand-written mocks so each test can assert exactly
//! which calls were made.

use todocheck::adapters::fetcher::StaticFetcher;
use todocheck::core::models::{CommentContext, Outcome, TaskRef, TaskStatus, TodoErrorKind};
use todocheck::core::ports::TodoMatcher;
use todocheck::core::services::{CheckError, Checker};
use todocheck::matchers::{Dialect, MatcherSettings, StandardMatcher};

use super::common::mocks::{RecordingFetcher, ScriptedMatcher};
use super::common::sample_lines;

const FILE: &str = "src/handler.rs";
const LINE: usize = 3;

fn run(
    checker: &Checker<RecordingFetcher>,
    matcher: &dyn TodoMatcher,
    comment: &str,
) -> Result<Outcome, CheckError> {
    checker.check(Some(matcher), comment, FILE, &sample_lines(), LINE)
}

mod not_applicable {
    use super::*;

    #[test]
    fn plain_comment_is_not_applicable() {
        let checker = Checker::new(RecordingFetcher::new());
        let outcome = run(&checker, &ScriptedMatcher::not_todo(), "// hello").unwrap();

        assert_eq!(outcome, Outcome::NotApplicable);
        assert!(checker.fetcher().calls().is_empty());
    }
}

mod malformed {
    use super::*;

    #[test]
    fn malformed_todo_is_reported_with_context() {
        let checker = Checker::new(RecordingFetcher::new());
        let matcher = ScriptedMatcher::malformed();
        let outcome = run(&checker, &matcher, "// TODO fix").unwrap();

        let err = outcome.into_violation().unwrap();
        assert_eq!(err.kind, TodoErrorKind::Malformed);
        assert_eq!(err.file, FILE);
        assert_eq!(err.line, LINE);
        assert_eq!(err.lines, sample_lines());
        assert_eq!(err.task, None);
    }

    #[test]
    fn malformed_todo_never_extracts_or_fetches() {
        let checker = Checker::new(RecordingFetcher::new());
        let matcher = ScriptedMatcher::malformed();
        run(&checker, &matcher, "// TODO").unwrap();

        assert_eq!(matcher.extract_calls(), 0);
        assert!(checker.fetcher().calls().is_empty());
    }
}

mod status {
    use super::*;

    #[test]
    fn valid_todo_fetches_exactly_once() {
        let checker = Checker::new(RecordingFetcher::new());
        run(&checker, &ScriptedMatcher::valid("42"), "// TODO 42").unwrap();

        assert_eq!(checker.fetcher().calls(), vec![TaskRef::from("42")]);
    }

    #[test]
    fn closed_issue_carries_reference_and_context() {
        let checker = Checker::new(RecordingFetcher::new().with_status("X", TaskStatus::Closed));
        let outcome = run(&checker, &ScriptedMatcher::valid("X"), "// TODO X").unwrap();

        let err = outcome.into_violation().unwrap();
        assert_eq!(err.kind, TodoErrorKind::IssueClosed);
        assert_eq!(err.task, Some(TaskRef::from("X")));
        assert_eq!(err.file, FILE);
        assert_eq!(err.line, LINE);
        assert_eq!(err.lines, sample_lines());
    }

    #[test]
    fn non_existent_issue_is_reported() {
        let checker = Checker::new(RecordingFetcher::new().with_status("Y", TaskStatus::NonExistent));
        let outcome = run(&checker, &ScriptedMatcher::valid("Y"), "// TODO Y").unwrap();

        let err = outcome.into_violation().unwrap();
        assert_eq!(err.kind, TodoErrorKind::IssueNonExistent);
        assert_eq!(err.task, Some(TaskRef::from("Y")));
    }

    #[test]
    fn open_issue_is_valid() {
        let checker = Checker::new(RecordingFetcher::new().with_status("1", TaskStatus::Open));
        let outcome = run(&checker, &ScriptedMatcher::valid("1"), "// TODO 1").unwrap();
        assert_eq!(outcome, Outcome::Valid);
        assert!(outcome.violation().is_none());
    }

    #[test]
    fn unmapped_status_is_valid() {
        let checker = Checker::new(RecordingFetcher::new().with_status("1", TaskStatus::Unknown));
        let outcome = run(&checker, &ScriptedMatcher::valid("1"), "// TODO 1").unwrap();
        assert_eq!(outcome, Outcome::Valid);
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_matcher_fails_without_fetching() {
        let checker = Checker::new(RecordingFetcher::new());
        for comment in ["// TODO 1", "", "plain text"] {
            let err = checker.check(None, comment, FILE, &sample_lines(), LINE).unwrap_err();
            assert!(matches!(err, CheckError::MissingMatcher));
            assert!(!err.is_internal());
        }
        assert!(checker.fetcher().calls().is_empty());
    }

    #[test]
    fn fetch_failure_is_propagated_with_cause() {
        let checker = Checker::new(RecordingFetcher::failing("503 Service Unavailable"));
        let err = run(&checker, &ScriptedMatcher::valid("7"), "// TODO 7").unwrap_err();

        assert!(!err.is_internal());
        let CheckError::Fetch { task, source } = err else {
            panic!("expected fetch error");
        };
        assert_eq!(task, TaskRef::from("7"));
        assert!(source.to_string().contains("503"));
        assert_eq!(checker.fetcher().calls().len(), 1);
    }

    #[test]
    fn fetch_error_keeps_source_chain() {
        let checker = Checker::new(RecordingFetcher::failing("dns failure"));
        let err = run(&checker, &ScriptedMatcher::valid("7"), "// TODO 7").unwrap_err();

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("dns failure"));
    }

    #[test]
    fn extraction_failure_is_internal() {
        let checker = Checker::new(RecordingFetcher::new());
        let err = run(&checker, &ScriptedMatcher::broken(), "// TODO 1").unwrap_err();

        assert!(err.is_internal());
        assert!(err.to_string().contains("contract violated"));
        assert!(checker.fetcher().calls().is_empty());
    }
}

mod behavior {
    use super::*;

    #[test]
    fn repeated_checks_are_identical() {
        let checker = Checker::new(RecordingFetcher::new().with_status("5", TaskStatus::Closed));
        let matcher = ScriptedMatcher::valid("5");

        let first = run(&checker, &matcher, "// TODO 5").unwrap();
        let second = run(&checker, &matcher, "// TODO 5").unwrap();
        assert_eq!(first, second);
        assert_eq!(checker.fetcher().calls().len(), 2);
    }

    #[test]
    fn one_checker_serves_many_matchers() {
        let checker = Checker::new(RecordingFetcher::new().with_status("3", TaskStatus::Closed));

        let c_like = StandardMatcher::new(Dialect::CStyle, &MatcherSettings::default()).unwrap();
        let hash = StandardMatcher::new(Dialect::Hash, &MatcherSettings::default()).unwrap();

        assert!(run(&checker, &c_like, "// TODO 3: x").unwrap().is_violation());
        assert!(run(&checker, &hash, "# TODO 3: x").unwrap().is_violation());
        assert_eq!(run(&checker, &hash, "// TODO 3: x").unwrap(), Outcome::NotApplicable);
    }

    #[test]
    fn violation_at_largest_line_number_renders() {
        let checker = Checker::new(StaticFetcher::with_statuses([("1", TaskStatus::Closed)]));
        let matcher = StandardMatcher::new(Dialect::CStyle, &MatcherSettings::default()).unwrap();
        let lines = vec!["x".to_string()];

        let outcome = checker.check(Some(&matcher), "// TODO 1", "a.rs", &lines, usize::MAX).unwrap();
        let err = outcome.into_violation().unwrap();
        assert!(format!("{err}").contains(&format!("a.rs:{}", usize::MAX)));
    }

    #[test]
    fn check_context_matches_check() {
        let checker = Checker::new(StaticFetcher::with_statuses([("9", TaskStatus::NonExistent)]));
        let matcher = StandardMatcher::new(Dialect::CStyle, &MatcherSettings::default()).unwrap();
        let ctx = CommentContext::new(FILE, sample_lines(), LINE, "// TODO #9: gone");

        let via_ctx = checker.check_context(Some(&matcher), &ctx).unwrap();
        let direct = checker.check(Some(&matcher), &ctx.comment, FILE, &sample_lines(), LINE).unwrap();
        assert_eq!(via_ctx, direct);
        assert_eq!(via_ctx.violation().map(|e| e.kind), Some(TodoErrorKind::IssueNonExistent));
    }

    #[test]
    fn checker_is_shareable_across_threads() {
        let checker = Checker::new(RecordingFetcher::new().with_status("2", TaskStatus::Closed));
        let matcher = StandardMatcher::new(Dialect::CStyle, &MatcherSettings::default()).unwrap();

        std::thread::scope(|s| {
            for n in 0..8 {
                let checker = &checker;
                let matcher = &matcher;
                s.spawn(move || {
                    let comment = format!("// TODO {}: item", n % 2 + 1);
                    let outcome = checker.check(Some(matcher), &comment, FILE, &[], n).unwrap();
                    assert_eq!(outcome.is_violation(), n % 2 + 1 == 2);
                });
            }
        });

        assert_eq!(checker.fetcher().calls().len(), 8);
    }
}
