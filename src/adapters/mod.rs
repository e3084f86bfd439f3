//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `fetcher/` - Task status sources (static table, cache, GitHub)

pub mod fetcher;
