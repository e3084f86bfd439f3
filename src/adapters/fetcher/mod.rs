//! Status fetcher implementations
//!
//! - [`StaticFetcher`] - Statuses declared up front (config file, tests)
//! - [`CachingFetcher`] - Memoizes another fetcher's answers
//! - [`GithubFetcher`] - GitHub issues REST API (`github` feature)

mod cache;
#[cfg(feature = "github")]
mod github;
mod static_map;

pub use cache::CachingFetcher;
#[cfg(feature = "github")]
pub use github::GithubFetcher;
pub use static_map::StaticFetcher;
