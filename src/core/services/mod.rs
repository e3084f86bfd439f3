//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! Every external interaction goes through a port trait.
//!
//! - [`checker`] - Check a single TODO comment against its issue tracker

pub mod checker;

pub use checker::{CheckError, Checker};
