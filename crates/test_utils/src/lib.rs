//! Test Utilities Crate
//!
//! Shared fixtures and property-test generators for the claim settlement
//! test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
