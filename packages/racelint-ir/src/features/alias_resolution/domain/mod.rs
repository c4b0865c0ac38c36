/// Alias Resolution Domain
pub mod alias_map;

pub use alias_map::*;
