pub mod application;
/// Race Detection Feature
///
/// Lock-set based static race detection over spawned (goroutine-like) units.
///
/// ## Features
/// - **Canonical accesses**: every read/write is keyed by the variable its
///   operand aliases to (temporaries and closure captures collapsed)
/// - **Happens-before pruning**: creator accesses before the spawn never race
///   with the spawned unit
/// - **Lock-set pruning**: accesses holding a common mutex never race
///
/// ## Architecture
/// - **Domain**: `AccessKind`, `AccessRecord`, `ReportedRace`, `RaceSeverity`
/// - **Infrastructure**: `LockSet`, `ConflictRule`, `RaceDetector`
/// - **Application**: `RaceAnalysisUseCase` (root selection + full pipeline)
/// - **Ports**: `RaceAnalyzerPort` trait
///
/// ## Performance
/// - Algorithm: O(I + Σ_v accesses(v)²) where I = instructions in the roots
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::*;

// Re-export domain types
pub use domain::*;

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::*;

pub use ports::*;
