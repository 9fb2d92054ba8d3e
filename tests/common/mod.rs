//! Common test utilities for autobot CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated groups root plus a fixture calendar
//! - Fixtures: calendar feed and syllabus content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
