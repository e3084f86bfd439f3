//! Command implementations

mod check;

pub use check::{CheckArgs, check};
