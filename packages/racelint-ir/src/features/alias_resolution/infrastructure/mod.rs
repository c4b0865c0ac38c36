/// Alias Resolution Infrastructure
pub mod scope_scanner;

pub use scope_scanner::*;
