/// Concurrency Tracking Infrastructure
pub mod unit_registry;

pub use unit_registry::*;
