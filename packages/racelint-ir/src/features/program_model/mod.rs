/// Program Model Feature
///
/// The IR contract consumed by the race engine: functions, blocks and typed
/// instructions produced upstream (SSA-style, one package at a time).
///
/// ## Architecture
/// - **Domain**: `Program`, `Function`, `Block`, `Instruction`
/// - **Infrastructure**: JSON hand-off loader with structural validation
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
