//! Common test utilities for racelint-ir
//!
//! This module provides shared fixtures, assertions, and builders
//! for integration tests.

mod assertions;
mod builders;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
