//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations
//!
//! Dependency order: program_model → alias_resolution → concurrency_tracking
//! → race_detection

pub mod program_model;

// Canonical variable identities (allocation temporaries, closure captures)
pub mod alias_resolution;

// Spawned units and their creation sites
pub mod concurrency_tracking;

pub mod race_detection;
