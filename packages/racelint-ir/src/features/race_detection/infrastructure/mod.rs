/// Race Detection Infrastructure
pub mod conflict;
pub mod error;
pub mod lock_set;
pub mod race_detector;

pub use conflict::*;
pub use error::*;
pub use lock_set::*;
pub use race_detector::*;
