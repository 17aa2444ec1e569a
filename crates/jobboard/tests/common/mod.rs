//! Shared test utilities for jobboard integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated runs over a temp-dir SQLite database
//! - Builder patterns for creating jobs and configs programmatically

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
