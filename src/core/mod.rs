//! Core domain logic for todocheck
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`TaskRef`, `TaskStatus`, `TodoError`, `Outcome`)
//! - `services/` - The checker pipeline
//! - `ports/` - Trait definitions for matchers and status fetchers

pub mod models;
pub mod ports;
pub mod services;
