//! todocheck - Validate TODO comments against the issue tracker they reference
//!
//! A TODO comment must name an issue (`// TODO 123: ...`) and that issue must
//! still be open. This library provides the checker that decides this for a
//! single comment, the matchers that understand comment syntax, and the
//! fetchers that ask issue trackers for status.
//!
//! ```
//! use todocheck::adapters::fetcher::StaticFetcher;
//! use todocheck::core::models::TaskStatus;
//! use todocheck::core::services::Checker;
//! use todocheck::matchers::{Dialect, MatcherSettings, StandardMatcher};
//!
//! let matcher = StandardMatcher::new(Dialect::CStyle, &MatcherSettings::default()).unwrap();
//! let checker = Checker::new(StaticFetcher::with_statuses([("12", TaskStatus::Closed)]));
//!
//! let outcome = checker
//!     .check(Some(&matcher), "// TODO 12: drop shim", "src/lib.rs", &[], 4)
//!     .unwrap();
//! assert!(outcome.is_violation());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod matchers;
pub mod output;
