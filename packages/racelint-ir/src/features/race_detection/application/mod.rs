/// Race Detection Application Layer
pub mod analyze_races;

pub use analyze_races::*;
