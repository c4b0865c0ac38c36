/// Concurrency Tracking Feature
///
/// Records which functions run as independent concurrent units (spawned
/// through a `go` instruction) and where each one was created. The creation
/// site gives the detector its only happens-before edge: everything the
/// creator did before the spawn is ordered before the whole spawned unit.
///
/// ## Architecture
/// - **Domain**: `CreationRecord`
/// - **Infrastructure**: `ConcurrencyRegistry`
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
