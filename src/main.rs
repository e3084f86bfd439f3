//! todocheck - Validate TODO comments against the issue tracker they reference
//!
//! Every TODO must name an issue, and that issue must still be open. This
//! binary checks one comment at a time; the heavy lifting lives in the
//! `todocheck` library.

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

use std::process::ExitCode;

mod cli;

/// Main entry point for the todocheck CLI
fn main() -> ExitCode {
    cli::run()
}
