/// Concurrency Tracking Domain
pub mod models;

pub use models::*;
