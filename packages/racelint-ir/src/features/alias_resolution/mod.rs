/// Alias Resolution Feature
///
/// Maps every local access token `(package, function, block, operand)` to a
/// canonical variable identity, collapsing allocation temporaries and
/// closure-captured bindings onto the variable they stand for.
///
/// ## Architecture
/// - **Domain**: `AliasMap`, `AliasTarget`
/// - **Infrastructure**: `ScopeScanner` (the prepass that also feeds the
///   concurrency tracker)
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
