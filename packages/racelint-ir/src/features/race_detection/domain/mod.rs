/// Race Detection Domain Models
pub mod models;
pub mod race_report;

pub use models::*;
pub use race_report::*;
